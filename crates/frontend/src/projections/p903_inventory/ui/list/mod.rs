use crate::projections::p903_inventory::ui::details::InventoryDetails;
use crate::shared::api_client::{use_api, ApiClient};
use crate::shared::components::select_filter::SelectFilter;
use crate::shared::config::use_config;
use crate::shared::data_table::{
    trigger_action, upload_action, ActionFuture, ColumnDef, StandardDataTable, TableMode,
};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_state::{error_banner, ListState, ServerCursor};
use crate::shared::notify::alert;
use crate::shared::number_format::format_quantity;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_product_group::aggregate::ProductGroup;
use contracts::domain::a004_warehouse::aggregate::Warehouse;
use contracts::projections::common::{ListQuery, ALL};
use contracts::projections::p903_inventory::dto::{
    InventoryAggregates, InventoryForm, InventoryItem, InventoryKey, InventoryListResponse,
};
use contracts::shared::api::ListEnvelope;
use contracts::shared::data_table::TableEvent;
use contracts::shared::period::DateRange;
use contracts::system::sync::INVENTORY_TEMPLATE_PATH;
use leptos::prelude::*;
use leptos::task::spawn_local;

const INVENTORY_PATH: &str = "/api/data/inventory";
const INVENTORY_DELETE_PATH: &str = "/api/data/inventory/delete";
const INVENTORY_IMPORT_PATH: &str = "/api/data/inventory/import";
const CRM_INVENTORY_SYNC_PATH: &str = "/api/data/crm/sync-inventory";

/// `(id, label)` lookups for the warehouse and group dropdowns.
#[derive(Clone, Copy)]
pub struct InventoryLookups {
    pub warehouses: RwSignal<Vec<(String, String)>>,
    pub groups: RwSignal<Vec<(String, String)>>,
}

impl InventoryLookups {
    pub fn load(api: ApiClient) -> Self {
        let lookups = Self {
            warehouses: RwSignal::new(Vec::new()),
            groups: RwSignal::new(Vec::new()),
        };
        spawn_local(async move {
            match api.get::<ListEnvelope<Warehouse>>("/api/data/warehouses").await {
                Ok(list) => lookups.warehouses.set(
                    list.into_rows()
                        .into_iter()
                        .map(|w| {
                            let label = w.label();
                            (w.warehouse_id, label)
                        })
                        .collect(),
                ),
                Err(e) => log::warn!("warehouses lookup failed: {e}"),
            }
            match api.get::<ListEnvelope<ProductGroup>>("/api/data/groups").await {
                Ok(list) => lookups.groups.set(
                    list.into_rows()
                        .into_iter()
                        .map(|g| (g.group_id, g.group_name))
                        .collect(),
                ),
                Err(e) => log::warn!("groups lookup failed: {e}"),
            }
        });
        lookups
    }
}

/// Columns shared by opening inventory and snapshots.
pub fn inventory_columns() -> Vec<ColumnDef<InventoryItem>> {
    vec![
        ColumnDef::custom("Date", |i: &InventoryItem| format_date(&i.snapshot_date).into_any()),
        ColumnDef::custom("Warehouse", |i: &InventoryItem| i.warehouse_label().into_any()),
        ColumnDef::field("SKU", "sku_id").with_class("table__cell--mono"),
        ColumnDef::field("Product", "product_name"),
        ColumnDef::field("Group", "group_name"),
        ColumnDef::custom("On Hand", |i: &InventoryItem| {
            let value = format_quantity(i.effective_on_hand());
            if i.has_correction() {
                let title = format!(
                    "Corrected from {}",
                    format_quantity(i.quantity_original.unwrap_or(i.quantity_on_hand))
                );
                view! { <span class="qty qty--corrected" title=title>{value}</span> }.into_any()
            } else {
                value.into_any()
            }
        })
        .with_class("table__cell--number"),
        ColumnDef::custom("On Order", |i: &InventoryItem| {
            format_quantity(i.quantity_on_order).into_any()
        })
        .with_class("table__cell--number"),
        ColumnDef::field("Unit", "unit"),
    ]
}

/// Totals row under the page; the leading cells span SKU-level columns.
pub fn page_totals(items: Signal<Vec<InventoryItem>>, trailing_cells: usize) -> impl IntoView {
    let totals = Signal::derive(move || items.with(|rows| InventoryAggregates::of_page(rows)));
    view! {
        <tr class="table__row table__row--totals">
            <td class="table__cell" colspan="5">"Page total"</td>
            <td class="table__cell table__cell--number">
                {move || format_quantity(totals.get().total_on_hand)}
            </td>
            <td class="table__cell table__cell--number">
                {move || format_quantity(totals.get().total_on_order)}
            </td>
            <td class="table__cell" colspan=trailing_cells.to_string()></td>
        </tr>
    }
}

/// Month input bound to a `YYYY-MM` string; empty means all dates.
#[component]
pub fn MonthFilter(value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">"Month"</label>
            <input
                type="month"
                class="form__input"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let api = use_api();
    let config = use_config();
    let page_size = config.server_page_size;
    let state = ListState::<InventoryItem>::new();
    let cursor = ServerCursor::new();
    let server_totals = RwSignal::new(None::<InventoryAggregates>);
    let group = RwSignal::new(ALL.to_string());
    let warehouse = RwSignal::new(ALL.to_string());
    let month = RwSignal::new(String::new());
    let lookups = InventoryLookups::load(api.clone());
    let editing = RwSignal::new(None::<InventoryForm>);

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let query = ListQuery::page(cursor.page.get_untracked(), page_size)
                .search(&cursor.search.get_untracked())
                .group(&group.get_untracked())
                .warehouse(&warehouse.get_untracked())
                .period(DateRange::parse_month(&month.get_untracked()));
            state.load(async move {
                let response = api
                    .get_json::<InventoryListResponse, _>(INVENTORY_PATH, &query)
                    .await?;
                cursor.total.set(response.total);
                server_totals.set(response.aggregates);
                Ok(response.data)
            });
        }
    });
    let on_change = Callback::new(move |event: TableEvent| {
        cursor.apply(&event);
        load.run(());
    });
    cursor.reset_on_change(move || (group.get(), warehouse.get(), month.get()), load);
    load.run(());

    let on_delete = Callback::new({
        let api = api.clone();
        move |item: InventoryItem| {
            let api = api.clone();
            let key = InventoryKey::from(&item);
            Box::pin(async move {
                match api.delete_with(INVENTORY_DELETE_PATH, &key).await {
                    Ok(()) => {
                        log::info!("🗑️ inventory {} @ {} deleted", key.sku_id, key.warehouse_id);
                        load.run(());
                        Ok(())
                    }
                    Err(e) => {
                        let message = e.user_message();
                        alert(&format!("Error: {message}"));
                        Err(message)
                    }
                }
            }) as ActionFuture
        }
    });

    let download_template = {
        let api = api.clone();
        move |_| {
            if let Err(e) = api.open_in_new_tab(&api.url(INVENTORY_TEMPLATE_PATH)) {
                alert(&e.user_message());
            }
        }
    };

    let summary = move || {
        server_totals.get().map(|t| {
            view! {
                <div class="summary-bar">
                    <span>"Total On Hand: "<strong>{format_quantity(t.total_on_hand)}</strong></span>
                    <span>"Total On Order: "<strong>{format_quantity(t.total_on_order)}</strong></span>
                </div>
            }
        })
    };

    let on_saved = Callback::new(move |_| {
        editing.set(None);
        load.run(());
    });
    let on_close = Callback::new(move |_| editing.set(None));

    view! {
        <PageFrame
            page_id="p903_inventory--list"
            category=PAGE_CAT_LIST
            title="Opening Inventory"
            actions=move || view! {
                <button class="button button--secondary" on:click=download_template.clone()>
                    {icon("download")}
                    "Template"
                </button>
            }
        >
            {error_banner(state.error)}
            {summary}
            <StandardDataTable
                description="Opening stock checkpoints per warehouse."
                rows=state.items
                columns=inventory_columns()
                strategy=TableMode::server(cursor.page, page_size, cursor.total, on_change)
                loading=state.loading
                search_placeholder="Search SKU or product..."
                on_sync=trigger_action(
                    api.clone(),
                    CRM_INVENTORY_SYNC_PATH.to_string(),
                    "Inventory sync from CRM started.",
                    config.sync_refetch_delay_ms,
                    load,
                )
                on_import=upload_action(api.clone(), INVENTORY_IMPORT_PATH.to_string(), load)
                import_title="Import Opening Inventory"
                on_edit=Callback::new(move |item: InventoryItem| {
                    editing.set(Some(InventoryForm::for_edit(&item)))
                })
                on_delete=on_delete
                toolbar=move || view! {
                    <SelectFilter
                        label="Group"
                        value=group
                        options=lookups.groups
                        all_label="All groups"
                    />
                    <SelectFilter
                        label="Warehouse"
                        value=warehouse
                        options=lookups.warehouses
                        all_label="All warehouses"
                    />
                    <MonthFilter value=month />
                }
                footer=move || page_totals(state.items.into(), 2)
            />
            {move || editing.get().map(|form| view! {
                <InventoryDetails
                    form=form
                    warehouses=lookups.warehouses.get_untracked()
                    groups=lookups.groups.get_untracked()
                    on_saved=on_saved
                    on_close=on_close
                />
            })}
        </PageFrame>
    }
}
