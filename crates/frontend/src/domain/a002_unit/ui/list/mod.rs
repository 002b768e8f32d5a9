use crate::shared::api_client::use_api;
use crate::shared::config::use_config;
use crate::shared::data_table::{
    delete_action, export_action, sync_action, ColumnDef, StandardDataTable, TableMode,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_state::{error_banner, ListState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_unit::aggregate::Unit;
use contracts::shared::api::ListEnvelope;
use contracts::system::sync::SyncTarget;
use leptos::prelude::*;

#[component]
pub fn UnitList() -> impl IntoView {
    let api = use_api();
    let config = use_config();
    let state = ListState::<Unit>::new();

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            state.load(async move {
                api.get::<ListEnvelope<Unit>>("/api/data/units")
                    .await
                    .map(ListEnvelope::into_rows)
            });
        }
    });
    load.run(());

    let columns = vec![
        ColumnDef::field("Unit ID", "unit_id").with_class("table__cell--mono"),
        ColumnDef::field("Unit Name", "unit_name"),
        ColumnDef::custom("Last Updated", |u: &Unit| {
            u.updated_at
                .as_deref()
                .map(format_datetime)
                .unwrap_or_else(|| "-".to_string())
                .into_any()
        }),
    ];

    view! {
        <PageFrame page_id="a002_unit--list" category=PAGE_CAT_LIST title="Units of Measure">
            {error_banner(state.error)}
            <StandardDataTable
                description="Manage units for products."
                rows=state.items
                columns=columns
                strategy=TableMode::client(config.client_page_size)
                loading=state.loading
                on_sync=sync_action(api.clone(), &config, SyncTarget::Units, load)
                on_export=export_action(state.items, "Units")
                on_delete=delete_action(
                    api.clone(),
                    |u: &Unit| format!("/api/data/units/{}", urlencoding::encode(&u.unit_id)),
                    load,
                )
            />
        </PageFrame>
    }
}
