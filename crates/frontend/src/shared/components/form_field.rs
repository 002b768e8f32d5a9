use leptos::prelude::*;

/// Labelled text input for dialog forms.
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    /// `text` unless given, e.g. `number` or `password`.
    #[prop(optional, into)]
    input_type: Option<Signal<&'static str>>,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| Signal::stored("text"));
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=move || input_type.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                placeholder=placeholder
                readonly=readonly
            />
        </div>
    }
}
