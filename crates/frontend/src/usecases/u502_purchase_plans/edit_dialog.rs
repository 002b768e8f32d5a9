use super::api;
use crate::shared::api_client::use_api;
use crate::shared::components::form_field::FormField;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notify::alert;
use crate::shared::number_format::format_quantity;
use contracts::usecases::u502_purchase_plans::dto::PlanEditForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn PlanEditDialog(
    form: PlanEditForm,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let title = format!("Adjust Plan: {}", form.sku_id);
    let suggested = format_quantity(form.suggested_quantity);
    let form = RwSignal::new(form);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move |_| {
        let request = match form.with_untracked(PlanEditForm::to_request) {
            Ok(r) => r,
            Err(e) => {
                error.set(Some(e.user_message()));
                return;
            }
        };
        let api = api.clone();
        saving.set(true);
        spawn_local(async move {
            match api::update(&api, &request).await {
                Ok(()) => {
                    log::info!("plan {} updated", request.plan_id);
                    on_saved.run(());
                }
                Err(e) => {
                    let message = e.user_message();
                    alert(&format!("Error: {message}"));
                    error.set(Some(message));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <ModalFrame on_close=on_close title=title modal_class="modal--form">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="details-form">
                <FormField
                    label="Suggested Quantity"
                    value=Signal::stored(suggested)
                    on_input=Callback::new(|_| {})
                    readonly=true
                />
                <FormField
                    label="Final Quantity"
                    value=Signal::derive(move || form.with(|f| f.final_quantity.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.final_quantity = v))
                    input_type=Signal::stored("number")
                />
                <div class="form-group">
                    <label>"Notes"</label>
                    <textarea
                        rows="3"
                        prop:value=move || form.with(|f| f.notes.clone())
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    ></textarea>
                </div>
            </div>
            <div class="details-actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="button button--primary" disabled=move || saving.get() on:click=save>
                    {icon("save")}
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </ModalFrame>
    }
}
