use crate::projections::p903_inventory::ui::list::{
    inventory_columns, page_totals, InventoryLookups, MonthFilter,
};
use crate::shared::api_client::use_api;
use crate::shared::components::select_filter::SelectFilter;
use crate::shared::data_table::{StandardDataTable, TableMode};
use crate::shared::list_state::{error_banner, ListState, ServerCursor};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::projections::common::{ListQuery, ALL};
use contracts::projections::p904_snapshots::dto::{
    SnapshotItem, SnapshotListResponse, SNAPSHOT_PAGE_SIZE,
};
use contracts::shared::data_table::TableEvent;
use contracts::shared::period::DateRange;
use leptos::prelude::*;

#[component]
pub fn SnapshotList() -> impl IntoView {
    let api = use_api();
    let state = ListState::<SnapshotItem>::new();
    let cursor = ServerCursor::new();
    let group = RwSignal::new(ALL.to_string());
    let warehouse = RwSignal::new(ALL.to_string());
    let month = RwSignal::new(String::new());
    let lookups = InventoryLookups::load(api.clone());

    let load = Callback::new(move |_| {
        let api = api.clone();
        let query = ListQuery::page(cursor.page.get_untracked(), SNAPSHOT_PAGE_SIZE)
            .search(&cursor.search.get_untracked())
            .group(&group.get_untracked())
            .warehouse(&warehouse.get_untracked())
            .period(DateRange::parse_month(&month.get_untracked()));
        state.load(async move {
            let response = api
                .get_json::<SnapshotListResponse, _>("/api/data/snapshots", &query)
                .await?;
            cursor.total.set(response.total);
            Ok(response.data)
        });
    });
    let on_change = Callback::new(move |event: TableEvent| {
        cursor.apply(&event);
        load.run(());
    });
    cursor.reset_on_change(move || (group.get(), warehouse.get(), month.get()), load);
    load.run(());

    view! {
        <PageFrame page_id="p904_snapshots--list" category=PAGE_CAT_LIST title="Inventory Snapshots">
            {error_banner(state.error)}
            <StandardDataTable
                description="Daily stock levels recorded by the backend."
                rows=state.items
                columns=inventory_columns()
                strategy=TableMode::server(cursor.page, SNAPSHOT_PAGE_SIZE, cursor.total, on_change)
                loading=state.loading
                search_placeholder="Search SKU or product..."
                toolbar=move || view! {
                    <SelectFilter label="Group" value=group options=lookups.groups all_label="All groups" />
                    <SelectFilter
                        label="Warehouse"
                        value=warehouse
                        options=lookups.warehouses
                        all_label="All warehouses"
                    />
                    <MonthFilter value=month />
                }
                footer=move || page_totals(state.items.into(), 1)
            />
        </PageFrame>
    }
}
