use super::view_model::ProductDetailsViewModel;
use crate::shared::api_client::use_api;
use crate::shared::components::form_field::FormField;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_product::aggregate::ProductForm;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(
    form: ProductForm,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let vm = ProductDetailsViewModel::new(form);
    let is_edit = vm.is_edit_mode();
    let title = if is_edit { "Edit Product" } else { "Add Product" };

    let group_options = vm.form.with_untracked(|f| f.group_names.clone());
    let unit_options = vm.form.with_untracked(|f| f.unit_names.clone());

    view! {
        <ModalFrame on_close=on_close title=title modal_class="modal--form">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <FormField
                    label="SKU"
                    value=Signal::derive(move || vm.form.with(|f| f.sku_id.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.sku_id = v))
                    placeholder="e.g. A001"
                    readonly=is_edit
                />
                <FormField
                    label="Product Name"
                    value=Signal::derive(move || vm.form.with(|f| f.product_name.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.product_name = v))
                />

                <div class="form-group">
                    <label>"Category/Group"</label>
                    <select
                        prop:value=move || vm.form.with(|f| f.group_id.clone())
                        on:change=move |ev| vm.form.update(|f| f.group_id = event_target_value(&ev))
                    >
                        <option value="">"-- None --"</option>
                        {group_options
                            .into_iter()
                            .map(|(id, name)| view! { <option value=id>{name}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>"Unit"</label>
                    <select
                        prop:value=move || vm.form.with(|f| f.base_unit_id.clone())
                        on:change=move |ev| vm.form.update(|f| f.base_unit_id = event_target_value(&ev))
                    >
                        <option value="">"-- None --"</option>
                        {unit_options
                            .into_iter()
                            .map(|(id, name)| view! { <option value=id>{name}</option> })
                            .collect_view()}
                    </select>
                </div>

                <FormField
                    label="Min Stock"
                    value=Signal::derive(move || vm.form.with(|f| f.min_stock_level.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.min_stock_level = v))
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
