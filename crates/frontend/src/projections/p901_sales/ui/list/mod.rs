use crate::shared::api_client::use_api;
use crate::shared::components::period_filter::PeriodFilter;
use crate::shared::config::use_config;
use crate::shared::data_table::{import_action, ColumnDef, StandardDataTable, TableMode};
use crate::shared::date_utils::{format_date, today};
use crate::shared::list_state::{error_banner, ListState, ServerCursor};
use crate::shared::number_format::{format_currency, format_quantity};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use chrono::Datelike;
use contracts::projections::common::ListQuery;
use contracts::projections::p901_sales::dto::SaleRecord;
use contracts::shared::api::ListEnvelope;
use contracts::shared::data_table::TableEvent;
use contracts::shared::period::PeriodSelection;
use contracts::system::sync::ImportType;
use leptos::prelude::*;

#[component]
pub fn SalesList() -> impl IntoView {
    let api = use_api();
    let config = use_config();
    let page_size = config.server_page_size;
    let currency = config.default_currency.clone();
    let state = ListState::<SaleRecord>::new();
    let cursor = ServerCursor::new();
    let period = RwSignal::new(PeriodSelection::year(today().year()));

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let query = ListQuery::page(cursor.page.get_untracked(), page_size)
                .search(&cursor.search.get_untracked())
                .period(period.get_untracked().to_range());
            state.load(async move {
                let envelope = api
                    .get_json::<ListEnvelope<SaleRecord>, _>("/api/data/sales", &query)
                    .await?;
                cursor.total.set(envelope.total());
                Ok(envelope.into_rows())
            });
        }
    });
    let on_change = Callback::new(move |event: TableEvent| {
        cursor.apply(&event);
        load.run(());
    });
    cursor.reset_on_change(move || period.get(), load);
    load.run(());

    let columns = vec![
        ColumnDef::custom("Date", |s: &SaleRecord| format_date(&s.order_date).into_any()),
        ColumnDef::field("Transaction", "transaction_id").with_class("table__cell--mono"),
        ColumnDef::field("SKU", "sku_id").with_class("table__cell--mono"),
        ColumnDef::field("Product", "product_name"),
        ColumnDef::custom("Quantity", |s: &SaleRecord| format_quantity(s.quantity).into_any())
            .with_class("table__cell--number"),
        ColumnDef::custom("Amount", move |s: &SaleRecord| {
            format_currency(s.amount, &currency).into_any()
        })
        .with_class("table__cell--number"),
        ColumnDef::field("Source", "source"),
    ];

    view! {
        <PageFrame page_id="p901_sales--list" category=PAGE_CAT_LIST title="Sales History">
            {error_banner(state.error)}
            <StandardDataTable
                description="Sales order lines imported from the ERP."
                rows=state.items
                columns=columns
                strategy=TableMode::server(cursor.page, page_size, cursor.total, on_change)
                loading=state.loading
                search_placeholder="Search SKU, product or order..."
                on_import=import_action(api.clone(), ImportType::SalesDetails, load)
                import_title="Import Sales Details"
                toolbar=move || view! { <PeriodFilter value=period /> }
            />
        </PageFrame>
    }
}
