use super::view_model::VendorDetailsViewModel;
use crate::shared::api_client::use_api;
use crate::shared::components::form_field::FormField;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a005_vendor::aggregate::VendorForm;
use leptos::prelude::*;

#[component]
pub fn VendorDetails(
    form: VendorForm,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let vm = VendorDetailsViewModel::new(form);
    let is_edit = vm.is_edit_mode();
    let field = move |get: fn(&VendorForm) -> String| Signal::derive(move || vm.form.with(get));

    view! {
        <ModalFrame
            on_close=on_close
            title=if is_edit { "Edit Vendor" } else { "Add Vendor" }
            modal_class="modal--form"
        >
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <FormField
                    label="Vendor ID"
                    value=field(|f| f.vendor_id.clone())
                    on_input=vm.setter(|f, v| f.vendor_id = v)
                    readonly=is_edit
                />
                <FormField
                    label="Vendor Name"
                    value=field(|f| f.vendor_name.clone())
                    on_input=vm.setter(|f, v| f.vendor_name = v)
                />
                <FormField
                    label="Address"
                    value=field(|f| f.address.clone())
                    on_input=vm.setter(|f, v| f.address = v)
                />
                <FormField
                    label="Email"
                    value=field(|f| f.email.clone())
                    on_input=vm.setter(|f, v| f.email = v)
                    input_type=Signal::stored("email")
                />
                <FormField
                    label="Phone"
                    value=field(|f| f.phone.clone())
                    on_input=vm.setter(|f, v| f.phone = v)
                />
                <FormField
                    label="Lead Time (days)"
                    value=field(|f| f.lead_time_avg.clone())
                    on_input=vm.setter(|f, v| f.lead_time_avg = v)
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
