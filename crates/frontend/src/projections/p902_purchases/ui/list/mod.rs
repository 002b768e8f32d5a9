use crate::shared::api_client::use_api;
use crate::shared::components::select_filter::SelectFilter;
use crate::shared::config::use_config;
use crate::shared::data_table::{import_action, ColumnDef, StandardDataTable, TableMode};
use crate::shared::date_utils::format_date;
use crate::shared::list_state::{error_banner, ListState, ServerCursor};
use crate::shared::number_format::format_quantity;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_product_group::aggregate::ProductGroup;
use contracts::projections::common::{ListQuery, ALL};
use contracts::projections::p902_purchases::dto::{PurchaseRecord, PURCHASE_TYPES};
use contracts::shared::api::ListEnvelope;
use contracts::shared::data_table::TableEvent;
use contracts::shared::period::DateRange;
use contracts::system::sync::ImportType;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn PurchaseList() -> impl IntoView {
    let api = use_api();
    let page_size = use_config().server_page_size;
    let state = ListState::<PurchaseRecord>::new();
    let cursor = ServerCursor::new();
    let purchase_type = RwSignal::new(ALL.to_string());
    let group = RwSignal::new(ALL.to_string());
    // `YYYY-MM` from the month input; empty means all dates.
    let month = RwSignal::new(String::new());
    let groups = RwSignal::new(Vec::<(String, String)>::new());

    {
        let api = api.clone();
        spawn_local(async move {
            match api.get::<ListEnvelope<ProductGroup>>("/api/data/groups").await {
                Ok(list) => groups.set(
                    list.into_rows()
                        .into_iter()
                        .map(|g| (g.group_id, g.group_name))
                        .collect(),
                ),
                Err(e) => log::warn!("groups lookup failed: {e}"),
            }
        });
    }

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let query = ListQuery::page(cursor.page.get_untracked(), page_size)
                .search(&cursor.search.get_untracked())
                .kind(&purchase_type.get_untracked())
                .group(&group.get_untracked())
                .period(DateRange::parse_month(&month.get_untracked()));
            state.load(async move {
                let envelope = api
                    .get_json::<ListEnvelope<PurchaseRecord>, _>("/api/data/purchases", &query)
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
    cursor.reset_on_change(
        move || (purchase_type.get(), group.get(), month.get()),
        load,
    );
    load.run(());

    let type_options = Signal::stored(
        PURCHASE_TYPES
            .iter()
            .filter(|(value, _)| *value != ALL)
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect::<Vec<_>>(),
    );

    let columns = vec![
        ColumnDef::custom("Date", |p: &PurchaseRecord| format_date(&p.order_date).into_any()),
        ColumnDef::custom("Week", |p: &PurchaseRecord| p.week_label().into_any()),
        ColumnDef::field("SKU", "sku_id").with_class("table__cell--mono"),
        ColumnDef::field("Product", "product_name"),
        ColumnDef::custom("Quantity", |p: &PurchaseRecord| format_quantity(p.quantity).into_any())
            .with_class("table__cell--number"),
        ColumnDef::custom("Type", |p: &PurchaseRecord| {
            let class = if p.is_planned() {
                "badge badge--warning"
            } else {
                "badge badge--success"
            };
            view! { <span class=class>{p.purchase_type.clone()}</span> }.into_any()
        }),
        ColumnDef::field("Order", "order_id"),
        ColumnDef::field("Source", "source"),
    ];

    view! {
        <PageFrame page_id="p902_purchases--list" category=PAGE_CAT_LIST title="Purchase History">
            {error_banner(state.error)}
            <StandardDataTable
                description="Received and planned purchase lines."
                rows=state.items
                columns=columns
                strategy=TableMode::server(cursor.page, page_size, cursor.total, on_change)
                loading=state.loading
                search_placeholder="Search SKU, product or order..."
                on_import=import_action(api.clone(), ImportType::PurchaseDetails, load)
                import_title="Import Purchase Details"
                toolbar=move || view! {
                    <SelectFilter
                        label="Type"
                        value=purchase_type
                        options=type_options
                        all_label="All types"
                    />
                    <SelectFilter label="Group" value=group options=groups all_label="All groups" />
                    <div class="form__group">
                        <label class="form__label">"Month"</label>
                        <input
                            type="month"
                            class="form__input"
                            prop:value=move || month.get()
                            on:change=move |ev| month.set(event_target_value(&ev))
                        />
                    </div>
                }
            />
        </PageFrame>
    }
}
