use crate::shared::api_client::use_api;
use crate::shared::config::use_config;
use crate::shared::data_table::{
    export_action, import_action, sync_action, ColumnDef, StandardDataTable, TableMode,
};
use crate::shared::list_state::{error_banner, ListState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a006_customer::aggregate::Customer;
use contracts::shared::api::ListEnvelope;
use contracts::system::sync::{ImportType, SyncTarget};
use leptos::prelude::*;

#[component]
pub fn CustomerList() -> impl IntoView {
    let api = use_api();
    let config = use_config();
    let state = ListState::<Customer>::new();

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            state.load(async move {
                api.get::<ListEnvelope<Customer>>("/api/data/customers")
                    .await
                    .map(ListEnvelope::into_rows)
            });
        }
    });
    load.run(());

    let columns = vec![
        ColumnDef::field("Customer ID", "customer_id").with_class("table__cell--mono"),
        ColumnDef::field("MISA Code", "misa_code"),
        ColumnDef::field("Customer Name", "customer_name"),
        ColumnDef::field("Address", "address"),
        ColumnDef::field("Phone", "phone"),
        ColumnDef::field("Email", "email"),
    ];

    view! {
        <PageFrame page_id="a006_customer--list" category=PAGE_CAT_LIST title="Customers">
            {error_banner(state.error)}
            <StandardDataTable
                description="Customers synced from the ERP partner list."
                rows=state.items
                columns=columns
                strategy=TableMode::client(config.client_page_size)
                loading=state.loading
                search_placeholder="Search customers..."
                on_sync=sync_action(api.clone(), &config, SyncTarget::Partners, load)
                on_import=import_action(api.clone(), ImportType::Customers, load)
                import_title="Import Customers"
                on_export=export_action(state.items, "Customers")
            />
        </PageFrame>
    }
}
