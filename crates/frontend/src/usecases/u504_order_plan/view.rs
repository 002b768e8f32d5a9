use crate::shared::api_client::use_api;
use crate::shared::config::use_config;
use crate::shared::data_table::{export_action, ColumnDef, StandardDataTable, TableMode};
use crate::shared::icons::icon;
use crate::shared::list_state::{error_banner, ListState};
use crate::shared::number_format::format_quantity;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::shared::api::ListEnvelope;
use contracts::usecases::u504_order_plan::dto::OrderPlanRow;
use leptos::prelude::*;

fn quantity(header: &'static str, value: fn(&OrderPlanRow) -> f64) -> ColumnDef<OrderPlanRow> {
    ColumnDef::custom(header, move |row: &OrderPlanRow| format_quantity(value(row)).into_any())
        .with_class("table__cell--number")
}

fn columns() -> Vec<ColumnDef<OrderPlanRow>> {
    vec![
        ColumnDef::field("SKU", "sku_id").with_class("table__cell--mono"),
        ColumnDef::field("Product", "product_name"),
        quantity("On Hand", |r| r.current_stock),
        quantity("On Order", |r| r.stock_on_order),
        quantity("Safety Stock", |r| r.safety_stock),
        quantity("Lead Time (d)", |r| r.lead_time_days),
        quantity("Avg Sales", |r| r.avg_sales),
        quantity("Fc M1", |r| r.forecast_month_1),
        quantity("Fc M2", |r| r.forecast_month_2),
        quantity("Fc M3", |r| r.forecast_month_3),
        ColumnDef::custom("Suggested Order", |r: &OrderPlanRow| {
            if r.needs_order() {
                view! { <span class="badge badge--warning">{format_quantity(r.suggested_order)}</span> }
                    .into_any()
            } else {
                "-".into_any()
            }
        })
        .with_class("table__cell--number"),
        ColumnDef::field("Notes", "notes"),
    ]
}

#[component]
pub fn OrderPlanView() -> impl IntoView {
    let api = use_api();
    let config = use_config();
    let state = ListState::<OrderPlanRow>::new();

    let load = Callback::new(move |_| {
        let api = api.clone();
        state.load(async move {
            api.get::<ListEnvelope<OrderPlanRow>>("/api/planning/order-plan")
                .await
                .map(ListEnvelope::into_rows)
        });
    });
    load.run(());

    view! {
        <PageFrame
            page_id="u504_order_plan--usecase"
            category=PAGE_CAT_USECASE
            title="Order Plan"
            subtitle="Suggested purchase quantities from stock, open orders and forecast."
            actions=move || view! {
                <button
                    class="button button--secondary"
                    disabled=move || state.loading.get()
                    on:click=move |_| load.run(())
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            }
        >
            {error_banner(state.error)}
            <StandardDataTable
                rows=state.items
                columns=columns()
                strategy=TableMode::client(config.client_page_size)
                loading=state.loading
                search_placeholder="Search SKU or product..."
                on_export=export_action(state.items, "Order_Plan")
            />
        </PageFrame>
    }
}
