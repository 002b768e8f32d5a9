pub mod u501_demand_forecast;
pub mod u502_purchase_plans;
pub mod u503_rolling_plan;
pub mod u504_order_plan;
pub mod u505_vendor_performance;
