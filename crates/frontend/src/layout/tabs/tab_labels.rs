/// Readable tab title for a tab key; unknown keys are their own title.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        // ── Dashboards (d4xx) ──
        "d400_home" => "Dashboard",
        "d401_purchasing_spend" => "Purchasing Spend",

        // ── Master data (a0xx) ──
        "a001_product" => "Products",
        "a002_unit" => "Units of Measure",
        "a003_product_group" => "Product Groups",
        "a004_warehouse" => "Warehouses",
        "a005_vendor" => "Vendors",
        "a006_customer" => "Customers",
        "a007_partner_group" => "Partner Groups",

        // ── Transactions (p9xx) ──
        "p901_sales" => "Sales History",
        "p902_purchases" => "Purchase History",
        "p903_inventory" => "Opening Inventory",
        "p904_snapshots" => "Inventory Snapshots",
        "p905_rolling_inventory" => "Rolling Inventory",

        // ── Planning (u5xx) ──
        "u501_demand_forecast" => "Demand Forecast",
        "u502_purchase_plans" => "Purchase Plans",
        "u503_rolling_plan" => "Rolling Supply Plan",
        "u504_order_plan" => "Order Plan",
        "u505_vendor_performance" => "Vendor Performance",

        // ── System ──
        "sys_planning_settings" => "Planning Settings",
        "sys_seasonal_factors" => "Seasonal Factors",
        "sys_integrations" => "Integrations",
        "sys_database" => "Database",

        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_keys() {
        assert_eq!(tab_label_for_key("u503_rolling_plan"), "Rolling Supply Plan");
        assert_eq!(tab_label_for_key("something_else"), "something_else");
    }
}
