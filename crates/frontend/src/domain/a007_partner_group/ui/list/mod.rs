use crate::shared::api_client::use_api;
use crate::shared::config::use_config;
use crate::shared::data_table::{
    export_action, import_action, sync_action, ColumnDef, StandardDataTable, TableMode,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_state::{error_banner, ListState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a007_partner_group::aggregate::PartnerGroup;
use contracts::shared::api::ListEnvelope;
use contracts::system::sync::{ImportType, SyncTarget};
use leptos::prelude::*;

#[component]
pub fn PartnerGroupList() -> impl IntoView {
    let api = use_api();
    let config = use_config();
    let state = ListState::<PartnerGroup>::new();

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            state.load(async move {
                api.get::<ListEnvelope<PartnerGroup>>("/api/data/partner-groups")
                    .await
                    .map(ListEnvelope::into_rows)
            });
        }
    });
    load.run(());

    let columns = vec![
        ColumnDef::field("Group ID", "group_id").with_class("table__cell--mono"),
        ColumnDef::field("Group Name", "group_name"),
        ColumnDef::custom("Last Updated", |g: &PartnerGroup| {
            g.updated_at
                .as_deref()
                .map(format_datetime)
                .unwrap_or_else(|| "-".to_string())
                .into_any()
        }),
    ];

    view! {
        <PageFrame page_id="a007_partner_group--list" category=PAGE_CAT_LIST title="Partner Groups">
            {error_banner(state.error)}
            <StandardDataTable
                description="Customer groups used for segmentation."
                rows=state.items
                columns=columns
                strategy=TableMode::client(config.client_page_size)
                loading=state.loading
                on_sync=sync_action(api.clone(), &config, SyncTarget::Partners, load)
                on_import=import_action(api.clone(), ImportType::PartnerGroups, load)
                import_title="Import Partner Groups"
                on_export=export_action(state.items, "Partner_Groups")
            />
        </PageFrame>
    }
}
