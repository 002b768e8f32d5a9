use crate::shared::api_client::use_api;
use crate::shared::config::use_config;
use crate::shared::data_table::{ColumnDef, StandardDataTable, TableMode};
use crate::shared::date_utils::format_date;
use crate::shared::list_state::{error_banner, ListState, ServerCursor};
use crate::shared::number_format::format_quantity;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::projections::common::ListQuery;
use contracts::projections::p905_rolling_inventory::dto::RollingInventoryRecord;
use contracts::shared::api::ListEnvelope;
use contracts::shared::data_table::TableEvent;
use leptos::prelude::*;

fn quantity(header: &'static str, get: fn(&RollingInventoryRecord) -> f64) -> ColumnDef<RollingInventoryRecord> {
    ColumnDef::custom(header, move |r: &RollingInventoryRecord| format_quantity(get(r)).into_any())
        .with_class("table__cell--number")
}

#[component]
pub fn RollingInventoryList() -> impl IntoView {
    let api = use_api();
    let page_size = use_config().server_page_size;
    let state = ListState::<RollingInventoryRecord>::new();
    let cursor = ServerCursor::new();

    let load = Callback::new(move |_| {
        let api = api.clone();
        let query = ListQuery::page(cursor.page.get_untracked(), page_size)
            .search(&cursor.search.get_untracked());
        state.load(async move {
            let envelope = api
                .get_json::<ListEnvelope<RollingInventoryRecord>, _>("/api/data/rolling-raw", &query)
                .await?;
            cursor.total.set(envelope.total());
            Ok(envelope.into_rows())
        });
    });
    let on_change = Callback::new(move |event: TableEvent| {
        cursor.apply(&event);
        load.run(());
    });
    load.run(());

    let columns = vec![
        ColumnDef::custom("Week", |r: &RollingInventoryRecord| format_date(&r.bucket_date).into_any()),
        ColumnDef::field("SKU", "sku_id").with_class("table__cell--mono"),
        ColumnDef::field("Product", "product_name"),
        ColumnDef::field("Warehouse", "warehouse_id"),
        quantity("Opening", |r| r.opening_stock),
        quantity("Sold", |r| r.actual_sold_qty),
        quantity("Imported", |r| r.actual_imported_qty),
        quantity("Forecast", |r| r.forecast_demand),
        quantity("Closing", |r| r.closing_stock),
        quantity("Net Req.", |r| r.net_requirement),
        ColumnDef::custom("Status", |r: &RollingInventoryRecord| {
            let class = if r.is_ok() {
                "badge badge--success".to_string()
            } else {
                format!("badge badge--status-{}", r.status.to_lowercase())
            };
            view! { <span class=class>{r.status.clone()}</span> }.into_any()
        }),
    ];

    view! {
        <PageFrame
            page_id="p905_rolling_inventory--list"
            category=PAGE_CAT_LIST
            title="Rolling Inventory"
        >
            {error_banner(state.error)}
            <StandardDataTable
                description="Raw weekly buckets of the last rolling calculation."
                rows=state.items
                columns=columns
                strategy=TableMode::server(cursor.page, page_size, cursor.total, on_change)
                loading=state.loading
                search_placeholder="Search SKU..."
            />
        </PageFrame>
    }
}
