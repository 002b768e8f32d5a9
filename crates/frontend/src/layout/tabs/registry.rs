//! `tab.key` to page component mapping.

use crate::dashboards::{HomeDashboard, PurchasingSpendDashboard};
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_unit::ui::list::UnitList;
use crate::domain::a003_product_group::ui::list::ProductGroupList;
use crate::domain::a004_warehouse::ui::list::WarehouseList;
use crate::domain::a005_vendor::ui::list::VendorList;
use crate::domain::a006_customer::ui::list::CustomerList;
use crate::domain::a007_partner_group::ui::list::PartnerGroupList;
use crate::projections::p901_sales::ui::list::SalesList;
use crate::projections::p902_purchases::ui::list::PurchaseList;
use crate::projections::p903_inventory::ui::list::InventoryList;
use crate::projections::p904_snapshots::ui::list::SnapshotList;
use crate::projections::p905_rolling_inventory::ui::list::RollingInventoryList;
use crate::system::database_settings::ui::DatabaseSettingsPage;
use crate::system::integrations::ui::IntegrationsPage;
use crate::system::planning_settings::ui::PlanningSettingsPage;
use crate::system::seasonal::ui::SeasonalFactorsPage;
use crate::usecases::u501_demand_forecast::view::DemandForecastView;
use crate::usecases::u502_purchase_plans::view::PurchasePlansView;
use crate::usecases::u503_rolling_plan::view::RollingPlanView;
use crate::usecases::u504_order_plan::view::OrderPlanView;
use crate::usecases::u505_vendor_performance::view::VendorPerformanceView;
use leptos::logging::log;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Dashboards
        // ═══════════════════════════════════════════════════════════════════
        "d400_home" => view! { <HomeDashboard /> }.into_any(),
        "d401_purchasing_spend" => view! { <PurchasingSpendDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Master data
        // ═══════════════════════════════════════════════════════════════════
        "a001_product" => view! { <ProductList /> }.into_any(),
        "a002_unit" => view! { <UnitList /> }.into_any(),
        "a003_product_group" => view! { <ProductGroupList /> }.into_any(),
        "a004_warehouse" => view! { <WarehouseList /> }.into_any(),
        "a005_vendor" => view! { <VendorList /> }.into_any(),
        "a006_customer" => view! { <CustomerList /> }.into_any(),
        "a007_partner_group" => view! { <PartnerGroupList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Transactions
        // ═══════════════════════════════════════════════════════════════════
        "p901_sales" => view! { <SalesList /> }.into_any(),
        "p902_purchases" => view! { <PurchaseList /> }.into_any(),
        "p903_inventory" => view! { <InventoryList /> }.into_any(),
        "p904_snapshots" => view! { <SnapshotList /> }.into_any(),
        "p905_rolling_inventory" => view! { <RollingInventoryList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Planning
        // ═══════════════════════════════════════════════════════════════════
        "u501_demand_forecast" => view! { <DemandForecastView /> }.into_any(),
        "u502_purchase_plans" => view! { <PurchasePlansView /> }.into_any(),
        "u503_rolling_plan" => view! { <RollingPlanView /> }.into_any(),
        "u504_order_plan" => view! { <OrderPlanView /> }.into_any(),
        "u505_vendor_performance" => view! { <VendorPerformanceView /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // System
        // ═══════════════════════════════════════════════════════════════════
        "sys_planning_settings" => view! { <PlanningSettingsPage /> }.into_any(),
        "sys_seasonal_factors" => view! { <SeasonalFactorsPage /> }.into_any(),
        "sys_integrations" => view! { <IntegrationsPage /> }.into_any(),
        "sys_database" => view! { <DatabaseSettingsPage /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Unknown / Fallback
        // ═══════════════════════════════════════════════════════════════════
        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
