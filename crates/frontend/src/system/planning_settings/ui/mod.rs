//! Safety-stock policies and the transaction reset.

use crate::shared::api_client::{use_api, ApiClient};
use crate::shared::icons::icon;
use crate::shared::list_state::{error_banner, ListState};
use crate::shared::notify::{alert, confirm};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::shared::api::{ApiError, ListEnvelope};
use contracts::system::planning_settings::{
    Policy, PolicyField, RESET_FIRST_PROMPT, RESET_SECOND_PROMPT, RESET_TRANSACTIONS_PATH,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn save_policy(api: &ApiClient, policy: &Policy) -> Result<(), ApiError> {
    api.put_json::<_, serde_json::Value>(&policy.endpoint(), &policy.to_update())
        .await
        .map(|_| ())
}

#[component]
pub fn PlanningSettingsPage() -> impl IntoView {
    let api = use_api();
    let state = ListState::<Policy>::new();
    let saving = RwSignal::new(None::<i64>);
    let resetting = RwSignal::new(false);

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            state.load(async move {
                api.get::<ListEnvelope<Policy>>("/api/planning/rolling/policies")
                    .await
                    .map(ListEnvelope::into_rows)
            });
        }
    });
    load.run(());

    let set_field = move |policy_id: i64, field: PolicyField, input: String| {
        let result = state.items.try_update(|rows| {
            rows.iter_mut()
                .find(|p| p.policy_id == policy_id)
                .map(|p| p.set_field(field, &input))
        });
        if let Some(Some(Err(e))) = result {
            alert(&e.user_message());
            // restore the last accepted value in the input
            state.items.update(|_| {});
        }
    };

    let on_save = Callback::new({
        let api = api.clone();
        move |policy: Policy| {
            let api = api.clone();
            saving.set(Some(policy.policy_id));
            spawn_local(async move {
                match save_policy(&api, &policy).await {
                    Ok(()) => {
                        log::info!("policy {} saved", policy.policy_id);
                        alert(&format!("Policy \"{}\" updated.", policy.policy_name));
                    }
                    Err(e) => alert(&format!("Error: {}", e.user_message())),
                }
                saving.set(None);
            });
        }
    });

    let reset = move |_| {
        if !confirm(RESET_FIRST_PROMPT) || !confirm(RESET_SECOND_PROMPT) {
            return;
        }
        let api = api.clone();
        resetting.set(true);
        spawn_local(async move {
            match api.post_empty::<serde_json::Value>(RESET_TRANSACTIONS_PATH).await {
                Ok(body) => {
                    let message = body
                        .get("message")
                        .and_then(|m| m.as_str())
                        .unwrap_or("Transaction data has been reset.")
                        .to_string();
                    log::warn!("transaction data reset");
                    alert(&message);
                }
                Err(e) => alert(&format!("Reset failed: {}", e.user_message())),
            }
            resetting.set(false);
        });
    };

    let policy_row = move |policy: Policy| {
        let id = policy.policy_id;
        let is_saving = move || saving.get() == Some(id);
        view! {
            <tr class="table__row">
                <td class="table__cell">
                    {policy.policy_name.clone()}
                    {policy.is_default.then(|| view! { <span class="badge badge--neutral">"Default"</span> })}
                </td>
                <td class="table__cell table__cell--number">
                    <input
                        class="form__input"
                        type="number"
                        min="0"
                        prop:value=policy.safety_stock_days.to_string()
                        on:change=move |ev| set_field(id, PolicyField::SafetyStockDays, event_target_value(&ev))
                    />
                </td>
                <td class="table__cell table__cell--number">
                    <input
                        class="form__input"
                        type="number"
                        min="0"
                        max="1"
                        step="0.01"
                        prop:value=policy.service_level_target.to_string()
                        on:change=move |ev| set_field(id, PolicyField::ServiceLevelTarget, event_target_value(&ev))
                    />
                </td>
                <td class="table__cell table__cell--actions">
                    <button
                        class="button button--primary"
                        disabled=is_saving
                        on:click=move |_| on_save.run(policy.clone())
                    >
                        {icon("save")}
                        "Save"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <PageFrame
            page_id="planning_settings--system"
            category=PAGE_CAT_SYSTEM
            title="Planning Settings"
            subtitle="Safety stock policies used by the rolling plan."
        >
            {error_banner(state.error)}
            <div class="table">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Policy"</th>
                            <th class="table__header-cell">"Safety Stock Days"</th>
                            <th class="table__header-cell">"Service Level Target"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if state.loading.get() {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="4">"Loading..."</td></tr>
                                }
                                .into_any();
                            }
                            let rows = state.items.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="4">"No policies found."</td></tr>
                                }
                                .into_any();
                            }
                            rows.into_iter().map(policy_row).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="danger-zone">
                <h3 class="danger-zone__title">{icon("alert")} "Danger Zone"</h3>
                <p class="danger-zone__text">
                    "Deletes all sales, purchases, inventory and plans. Master data is kept."
                </p>
                <button
                    class="button button--danger"
                    disabled=move || resetting.get()
                    on:click=reset
                >
                    {icon("delete")}
                    {move || if resetting.get() { "Resetting..." } else { "Reset Transactions" }}
                </button>
            </div>
        </PageFrame>
    }
}
