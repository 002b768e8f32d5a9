use crate::shared::api_client::use_api;
use crate::shared::config::use_config;
use crate::shared::data_table::{
    delete_action, export_action, sync_action, ColumnDef, StandardDataTable, TableMode,
};
use crate::shared::list_state::{error_banner, ListState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_warehouse::aggregate::Warehouse;
use contracts::shared::api::ListEnvelope;
use contracts::system::sync::SyncTarget;
use leptos::prelude::*;

#[component]
pub fn WarehouseList() -> impl IntoView {
    let api = use_api();
    let config = use_config();
    let state = ListState::<Warehouse>::new();

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            state.load(async move {
                api.get::<ListEnvelope<Warehouse>>("/api/data/warehouses")
                    .await
                    .map(ListEnvelope::into_rows)
            });
        }
    });
    load.run(());

    let columns = vec![
        ColumnDef::field("Warehouse ID", "warehouse_id").with_class("table__cell--mono"),
        ColumnDef::field("Warehouse Name", "warehouse_name"),
        ColumnDef::field("Address", "address"),
    ];

    view! {
        <PageFrame page_id="a004_warehouse--list" category=PAGE_CAT_LIST title="Warehouses">
            {error_banner(state.error)}
            <StandardDataTable
                description="Storage locations tracked by inventory."
                rows=state.items
                columns=columns
                strategy=TableMode::client(config.client_page_size)
                loading=state.loading
                on_sync=sync_action(api.clone(), &config, SyncTarget::Warehouses, load)
                on_export=export_action(state.items, "Warehouses")
                on_delete=delete_action(
                    api.clone(),
                    |w: &Warehouse| {
                        format!("/api/data/warehouses/{}", urlencoding::encode(&w.warehouse_id))
                    },
                    load,
                )
            />
        </PageFrame>
    }
}
