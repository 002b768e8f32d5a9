use crate::domain::a005_vendor::ui::details::VendorDetails;
use crate::shared::api_client::use_api;
use crate::shared::config::use_config;
use crate::shared::data_table::{
    export_action, import_action, sync_action, ColumnDef, StandardDataTable, TableMode,
};
use crate::shared::list_state::{error_banner, ListState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_vendor::aggregate::{Vendor, VendorForm};
use contracts::shared::api::ListEnvelope;
use contracts::system::sync::{ImportType, SyncTarget};
use leptos::prelude::*;

#[component]
pub fn VendorList() -> impl IntoView {
    let api = use_api();
    let config = use_config();
    let state = ListState::<Vendor>::new();
    let editing = RwSignal::new(None::<VendorForm>);

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            state.load(async move {
                api.get::<ListEnvelope<Vendor>>("/api/data/vendors?limit=1000")
                    .await
                    .map(ListEnvelope::into_rows)
            });
        }
    });
    load.run(());

    let columns = vec![
        ColumnDef::field("Vendor ID", "vendor_id").with_class("table__cell--mono"),
        ColumnDef::field("Vendor Name", "vendor_name"),
        ColumnDef::field("Address", "address"),
        ColumnDef::field("Email", "email"),
        ColumnDef::field("Phone", "phone"),
        ColumnDef::custom("Lead Time", |v: &Vendor| {
            v.lead_time_avg
                .map(|d| format!("{d} days"))
                .unwrap_or_else(|| "-".to_string())
                .into_any()
        })
        .with_class("table__cell--number"),
    ];

    let on_saved = Callback::new(move |_| {
        editing.set(None);
        load.run(());
    });
    let on_close = Callback::new(move |_| editing.set(None));

    view! {
        <PageFrame page_id="a005_vendor--list" category=PAGE_CAT_LIST title="Vendors">
            {error_banner(state.error)}
            <StandardDataTable
                description="Suppliers and their average lead times."
                rows=state.items
                columns=columns
                strategy=TableMode::client(config.client_page_size)
                loading=state.loading
                search_placeholder="Search vendors..."
                on_sync=sync_action(api.clone(), &config, SyncTarget::Partners, load)
                on_import=import_action(api.clone(), ImportType::Vendors, load)
                import_title="Import Vendors"
                on_export=export_action(state.items, "Vendors")
                on_add=Callback::new(move |_| editing.set(Some(VendorForm::default())))
                on_edit=Callback::new(move |v: Vendor| editing.set(Some(VendorForm::for_edit(&v))))
            />
            {move || editing.get().map(|form| view! {
                <VendorDetails form=form on_saved=on_saved on_close=on_close />
            })}
        </PageFrame>
    }
}
