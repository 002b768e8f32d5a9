use super::view_model::InventoryDetailsViewModel;
use crate::shared::api_client::use_api;
use crate::shared::components::form_field::FormField;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::projections::p903_inventory::dto::InventoryForm;
use leptos::prelude::*;

/// Quantity correction, warehouse move and regrouping of one opening-stock row.
#[component]
pub fn InventoryDetails(
    form: InventoryForm,
    /// `(id, name)` pairs
    warehouses: Vec<(String, String)>,
    groups: Vec<(String, String)>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let heading = format!(
        "{} · {}",
        form.original.sku_id,
        form.original.product_name.clone().unwrap_or_default()
    );
    let snapshot_date = form.original.snapshot_date.clone();
    let vm = InventoryDetailsViewModel::new(form);

    view! {
        <ModalFrame on_close=on_close title="Edit Inventory" modal_class="modal--form">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <p class="details-subtitle">{heading}</p>
            <div class="details-form">
                <FormField
                    label="Snapshot Date"
                    value=Signal::stored(snapshot_date)
                    on_input=Callback::new(|_| {})
                    readonly=true
                />

                <div class="form-group">
                    <label>"Warehouse"</label>
                    <select
                        prop:value=move || vm.form.with(|f| f.warehouse_id.clone())
                        on:change=move |ev| vm.form.update(|f| f.warehouse_id = event_target_value(&ev))
                    >
                        {warehouses
                            .into_iter()
                            .map(|(id, name)| view! { <option value=id>{name}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>"Group"</label>
                    <select
                        prop:value=move || vm.form.with(|f| f.group_id.clone())
                        on:change=move |ev| vm.form.update(|f| f.group_id = event_target_value(&ev))
                    >
                        <option value="">"-- Keep current --"</option>
                        {groups
                            .into_iter()
                            .map(|(id, name)| view! { <option value=id>{name}</option> })
                            .collect_view()}
                    </select>
                </div>

                <FormField
                    label="Opening Quantity"
                    value=Signal::derive(move || vm.form.with(|f| f.quantity_on_hand.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.quantity_on_hand = v))
                    input_type=Signal::stored("number")
                />
                <FormField
                    label="Actual Quantity (counted)"
                    value=Signal::derive(move || vm.form.with(|f| f.quantity_update.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.quantity_update = v))
                    placeholder="Leave empty to keep the book quantity"
                    input_type=Signal::stored("number")
                />
            </div>

            <div class="details-actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || vm.saving.get()
                    on:click=move |_| vm.save_command(api.clone(), on_saved)
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </ModalFrame>
    }
}
