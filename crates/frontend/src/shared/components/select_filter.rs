use contracts::projections::common::ALL;
use leptos::prelude::*;

/// Labelled `<select>` bound to a string signal. With `all_label` an extra
/// first option carrying [`ALL`] is offered.
#[component]
pub fn SelectFilter(
    #[prop(optional)] label: Option<&'static str>,
    value: RwSignal<String>,
    /// `(value, label)` pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional)] all_label: Option<&'static str>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {label.map(|l| view! { <label class="form__label">{l}</label> })}
            <select
                class="form__select"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {all_label.map(|text| view! {
                    <option value=ALL selected=move || value.with(|v| v == ALL)>{text}</option>
                })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || value.with(|v| *v == current)>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
