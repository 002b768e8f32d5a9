use crate::shared::api_client::use_api;
use crate::shared::config::use_config;
use crate::shared::data_table::{export_action, sync_action, ColumnDef, StandardDataTable, TableMode};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_state::{error_banner, ListState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_product_group::aggregate::{ProductGroup, ProductGroupRow};
use contracts::shared::api::ListEnvelope;
use contracts::shared::data_table::DataTableFilter;
use contracts::system::sync::SyncTarget;
use leptos::prelude::*;

#[component]
pub fn ProductGroupList() -> impl IntoView {
    let api = use_api();
    let config = use_config();
    let state = ListState::<ProductGroupRow>::new();

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            state.load(async move {
                let groups = api
                    .get::<ListEnvelope<ProductGroup>>("/api/data/groups")
                    .await?
                    .into_rows();
                Ok(ProductGroupRow::build_all(&groups))
            });
        }
    });
    load.run(());

    let filters = Signal::derive(move || {
        state.items.with(|rows| {
            vec![DataTableFilter::from_values(
                "parent_name",
                "Parent Group",
                rows.iter().map(|r| r.parent_name.clone()),
            )]
        })
    });

    let columns = vec![
        ColumnDef::field("Group ID", "group_id").with_class("table__cell--mono"),
        ColumnDef::field("Group Name", "group_name"),
        ColumnDef::field("MISA Code", "misa_code"),
        ColumnDef::field("Parent Group", "parent_name"),
        ColumnDef::custom("Last Updated", |g: &ProductGroupRow| {
            format_datetime(&g.updated_at).into_any()
        }),
    ];

    view! {
        <PageFrame page_id="a003_product_group--list" category=PAGE_CAT_LIST title="Product Groups">
            {error_banner(state.error)}
            <StandardDataTable
                description="Product hierarchy used by filters and planning."
                rows=state.items
                columns=columns
                strategy=TableMode::client(config.client_page_size)
                loading=state.loading
                filters=filters
                on_sync=sync_action(api.clone(), &config, SyncTarget::Groups, load)
                on_export=export_action(state.items, "Product_Groups")
            />
        </PageFrame>
    }
}
