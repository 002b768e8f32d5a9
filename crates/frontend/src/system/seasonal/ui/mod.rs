use crate::shared::api_client::use_api;
use crate::shared::icons::icon;
use crate::shared::list_state::{error_banner, ListState};
use crate::shared::notify::alert;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::shared::api::ListEnvelope;
use contracts::system::seasonal::{SeasonalEdits, SeasonalFactor, SeasonalField};
use leptos::prelude::*;
use leptos::task::spawn_local;

const SEASONAL_PATH: &str = "/api/planning/settings/seasonal";
const SEASONAL_UPDATE_PATH: &str = "/api/planning/settings/seasonal/update";

#[component]
pub fn SeasonalFactorsPage() -> impl IntoView {
    let api = use_api();
    let state = ListState::<SeasonalFactor>::new();
    let edits = RwSignal::new(SeasonalEdits::default());
    let saving = RwSignal::new(false);

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            state.load(async move {
                api.get::<ListEnvelope<SeasonalFactor>>(SEASONAL_PATH)
                    .await
                    .map(ListEnvelope::into_rows)
            });
        }
    });
    load.run(());

    let edit = move |month: u32, field: SeasonalField, input: String| {
        state.items.with_untracked(|factors| {
            edits.update(|e| e.edit(factors, month, field, &input));
        });
    };

    let save = move |_| {
        let payload = edits.with_untracked(SeasonalEdits::to_payload);
        if payload.is_empty() {
            alert("No changes to save.");
            return;
        }
        let api = api.clone();
        saving.set(true);
        spawn_local(async move {
            match api
                .put_json::<_, serde_json::Value>(SEASONAL_UPDATE_PATH, &payload)
                .await
            {
                Ok(_) => {
                    log::info!("{} seasonal factors saved", payload.len());
                    edits.update(SeasonalEdits::clear);
                    alert("Seasonal factors saved.");
                    load.run(());
                }
                Err(e) => alert(&format!("Error: {}", e.user_message())),
            }
            saving.set(false);
        });
    };

    let month_row = move |row: SeasonalFactor| {
        let month = row.month;
        view! {
            <tr class="table__row">
                <td class="table__cell">{row.month_label()}</td>
                <td class="table__cell table__cell--number">
                    <input
                        class="form__input"
                        type="number"
                        step="0.05"
                        min="0"
                        prop:value=row.demand_multiplier.to_string()
                        on:change=move |ev| edit(month, SeasonalField::DemandMultiplier, event_target_value(&ev))
                    />
                </td>
                <td class="table__cell table__cell--number">
                    <input
                        class="form__input"
                        type="number"
                        prop:value=row.supplier_delay_days.to_string()
                        on:change=move |ev| edit(month, SeasonalField::SupplierDelayDays, event_target_value(&ev))
                    />
                </td>
                <td class="table__cell table__cell--number">
                    <input
                        class="form__input"
                        type="number"
                        prop:value=row.shipping_delay_days.to_string()
                        on:change=move |ev| edit(month, SeasonalField::ShippingDelayDays, event_target_value(&ev))
                    />
                </td>
                <td class="table__cell">
                    <input
                        class="form__input"
                        type="text"
                        prop:value=row.description.clone()
                        on:change=move |ev| edit(month, SeasonalField::Description, event_target_value(&ev))
                    />
                </td>
            </tr>
        }
    };

    view! {
        <PageFrame
            page_id="seasonal--system"
            category=PAGE_CAT_SYSTEM
            title="Seasonal Factors"
            subtitle="Monthly demand multipliers and supply delays."
            actions=move || view! {
                <button
                    class="button button--primary"
                    disabled=move || saving.get() || edits.with(SeasonalEdits::is_empty)
                    on:click=save.clone()
                >
                    {icon("save")}
                    {move || match edits.with(SeasonalEdits::len) {
                        0 => "Save".to_string(),
                        n => format!("Save ({n})"),
                    }}
                </button>
            }
        >
            {error_banner(state.error)}
            <div class="table">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Month"</th>
                            <th class="table__header-cell">"Demand Multiplier"</th>
                            <th class="table__header-cell">"Supplier Delay (d)"</th>
                            <th class="table__header-cell">"Shipping Delay (d)"</th>
                            <th class="table__header-cell">"Description"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let factors = state.items.get();
                            edits.with(|e| {
                                (1..=12u32)
                                    .map(|month| e.current(&factors, month))
                                    .collect::<Vec<_>>()
                            })
                            .into_iter()
                            .map(month_row)
                            .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
