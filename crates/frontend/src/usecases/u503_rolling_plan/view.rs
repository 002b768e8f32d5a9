use super::api;
use super::matrix_table::MatrixTable;
use crate::shared::api_client::use_api;
use crate::shared::components::product_multi_select::ProductMultiSelect;
use crate::shared::components::select_filter::SelectFilter;
use crate::shared::date_utils::today;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::list_state::{error_banner, ListState};
use crate::shared::notify::alert;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a003_product_group::aggregate::ProductGroup;
use contracts::projections::common::ALL;
use contracts::shared::api::ListEnvelope;
use contracts::shared::csv_export::export_filename;
use contracts::usecases::u503_rolling_plan::{
    matrix_csv, DateWindow, EditOverlay, MatrixQuery, MatrixView, RollingMatrix, RollingRecord,
    RunRequest, SaveOutcome,
};
use contracts::usecases::u503_rolling_plan::dto::DEFAULT_PROFILE_ID;
use leptos::prelude::*;
use leptos::task::spawn_local;

const EXPORT_PREFIX: &str = "Supply_Plan_Rolling";

fn selected(value: &str) -> Option<String> {
    (value != ALL && !value.is_empty()).then(|| value.to_string())
}

fn edits_phrase(n: usize) -> String {
    match n {
        1 => "1 edit".to_string(),
        n => format!("{n} edits"),
    }
}

fn outcome_message(outcome: &SaveOutcome) -> Option<String> {
    match outcome {
        SaveOutcome::Nothing => None,
        SaveOutcome::Saved { count, held: 0 } => {
            Some(format!("Saved {count} planned supply changes."))
        }
        SaveOutcome::Saved { count, held } => Some(format!(
            "Saved {count} planned supply changes. {} outside the current view {} still pending.",
            edits_phrase(*held),
            if *held == 1 { "is" } else { "are" }
        )),
        SaveOutcome::Failed {
            saved,
            failed,
            error,
        } => Some(format!(
            "Saved {saved}, failed {failed}: {}",
            error.user_message()
        )),
    }
}

#[component]
pub fn RollingPlanView() -> impl IntoView {
    let api = use_api();
    let records = ListState::<RollingRecord>::new();
    let overlay = RwSignal::new(EditOverlay::new());
    let view_mode = RwSignal::new(MatrixView::Weekly);
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());

    let profiles = RwSignal::new(Vec::<(String, String)>::new());
    let profile = RwSignal::new(DEFAULT_PROFILE_ID.to_string());
    let warehouses = RwSignal::new(Vec::<(String, String)>::new());
    let warehouse = RwSignal::new(ALL.to_string());
    let categories = RwSignal::new(Vec::<(String, String)>::new());
    let category = RwSignal::new(ALL.to_string());
    let skus = RwSignal::new(Vec::<String>::new());

    let running = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let matrix = Memo::new(move |_| {
        let window = DateWindow::new(&date_from.get(), &date_to.get());
        let built = records.items.with(|rows| RollingMatrix::build(rows, &window));
        if built.rejected > 0 {
            log::warn!("rolling matrix: {} records with a malformed bucket date", built.rejected);
        }
        built
    });
    let pending = Signal::derive(move || overlay.with(EditOverlay::len));

    // ── Lookups ──
    {
        let api = api.clone();
        spawn_local(async move {
            match api::fetch_profiles(&api).await {
                Ok(list) => {
                    if let Some(first) = list.first() {
                        profile.set(first.profile_id.clone());
                    }
                    profiles.set(
                        list.into_iter()
                            .map(|p| {
                                let label = if p.profile_name.is_empty() {
                                    p.profile_id.clone()
                                } else {
                                    p.profile_name
                                };
                                (p.profile_id, label)
                            })
                            .collect(),
                    );
                }
                Err(e) => log::warn!("profiles lookup failed: {e}"),
            }
            match api::fetch_warehouses(&api).await {
                Ok(list) => warehouses.set(
                    list.iter()
                        .map(|w| (w.warehouse_id.clone(), w.label()))
                        .collect(),
                ),
                Err(e) => log::warn!("warehouses lookup failed: {e}"),
            }
            match api.get::<ListEnvelope<ProductGroup>>("/api/data/groups").await {
                Ok(list) => categories.set(
                    list.into_rows()
                        .into_iter()
                        .map(|g| (g.group_name.clone(), g.group_name))
                        .collect(),
                ),
                Err(e) => log::warn!("groups lookup failed: {e}"),
            }
        });
    }

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let query = MatrixQuery {
                category: selected(&category.get_untracked()),
                warehouse_id: selected(&warehouse.get_untracked()),
            };
            records.load(async move { api::fetch_matrix(&api, &query).await });
        }
    });
    load.run(());

    Effect::new(move |prev: Option<(String, String)>| {
        let value = (category.get(), warehouse.get());
        if prev.is_some_and(|p| p != value) {
            load.run(());
        }
        value
    });

    let run = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let profile_id = profile.get_untracked();
            let request = RunRequest::new(&profile_id, skus.get_untracked());
            running.set(true);
            spawn_local(async move {
                match api::run(&api, &request).await {
                    Ok(()) => {
                        load.run(());
                        alert(&format!("Calculation Complete (Mode: {})!", request.profile_id));
                    }
                    Err(e) => {
                        log::error!("rolling run failed: {e}");
                        alert("Failed to run calculation.");
                    }
                }
                running.set(false);
            });
        }
    };

    let save = {
        let api = api.clone();
        move |_| {
            let fallback = selected(&warehouse.get_untracked());
            let (updates, outside) = matrix.with_untracked(|m| {
                overlay.with_untracked(|o| (o.updates(m, fallback.as_deref()), o.outside(m)))
            });
            if updates.is_empty() {
                if outside > 0 {
                    alert(&format!(
                        "{} outside the current view. Widen the date range or clear the filters to save them.",
                        edits_phrase(outside)
                    ));
                } else {
                    alert("No changes to save.");
                }
                return;
            }
            let api = api.clone();
            saving.set(true);
            spawn_local(async move {
                let results = api::save_updates(&api, updates).await;
                if let Some(outcome) = overlay.try_update(|o| o.apply_results(results)) {
                    if let Some(message) = outcome_message(&outcome) {
                        alert(&message);
                    }
                    if outcome.needs_refetch() {
                        load.run(());
                    }
                }
                saving.set(false);
            });
        }
    };

    let discard = move |_| overlay.update(EditOverlay::clear);

    let export = move |_| {
        let result = matrix.with_untracked(|m| {
            overlay.with_untracked(|o| matrix_csv(m, o, view_mode.get_untracked()))
        });
        let outcome = result.and_then(|content| {
            download_csv(&content, &export_filename(EXPORT_PREFIX, today()))
        });
        if let Err(e) = outcome {
            alert(&e.to_string());
        }
    };

    let view_button = move |mode: MatrixView| {
        view! {
            <button
                class="button button--secondary"
                class:button--active=move || view_mode.get() == mode
                on:click=move |_| view_mode.set(mode)
            >
                {mode.label()}
            </button>
        }
    };

    view! {
        <PageFrame
            page_id="u503_rolling_plan--usecase"
            category=PAGE_CAT_USECASE
            title="Rolling Supply Planning"
            subtitle="Master plan and order generation, week 1 to 52."
            actions=move || view! {
                <SelectFilter value=profile options=profiles />
                <button
                    class="button button--primary"
                    disabled=move || running.get()
                    on:click=run.clone()
                >
                    {icon("play")}
                    {move || if running.get() { "Calculating..." } else { "Run Calculation" }}
                </button>
                <button class="button button--secondary" on:click=export>
                    {icon("download")}
                    "Export CSV"
                </button>
            }
        >
            {error_banner(records.error)}
            <div class="filter-panel">
                <div class="form__group">
                    <label class="form__label">"Products"</label>
                    <ProductMultiSelect value=skus />
                </div>
                <SelectFilter label="Category" value=category options=categories all_label="All categories" />
                <SelectFilter label="Warehouse" value=warehouse options=warehouses all_label="All warehouses" />
                <div class="form__group">
                    <label class="form__label">"From"</label>
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || date_from.get()
                        on:change=move |ev| date_from.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"To"</label>
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || date_to.get()
                        on:change=move |ev| date_to.set(event_target_value(&ev))
                    />
                </div>
                <div class="button-group">
                    {view_button(MatrixView::Weekly)}
                    {view_button(MatrixView::Monthly)}
                </div>
            </div>

            <div class="matrix__toolbar">
                <span class="matrix__pending">
                    {move || match pending.get() {
                        0 => "No pending changes".to_string(),
                        1 => "1 pending change".to_string(),
                        n => format!("{n} pending changes"),
                    }}
                </span>
                <button
                    class="button button--secondary"
                    disabled=move || pending.get() == 0 || saving.get()
                    on:click=discard
                >
                    {icon("x")}
                    "Discard"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || pending.get() == 0 || saving.get()
                    on:click=save
                >
                    {icon("save")}
                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </div>

            <MatrixTable matrix=matrix overlay=overlay view_mode=view_mode loading=records.loading />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::api::ApiError;

    #[test]
    fn test_selected_filter_value() {
        assert_eq!(selected(ALL), None);
        assert_eq!(selected(""), None);
        assert_eq!(selected("WH01"), Some("WH01".to_string()));
    }

    #[test]
    fn test_outcome_message() {
        assert_eq!(outcome_message(&SaveOutcome::Nothing), None);
        assert_eq!(
            outcome_message(&SaveOutcome::Saved { count: 3, held: 0 }).as_deref(),
            Some("Saved 3 planned supply changes.")
        );
        assert_eq!(
            outcome_message(&SaveOutcome::Saved { count: 1, held: 1 }).as_deref(),
            Some("Saved 1 planned supply changes. 1 edit outside the current view is still pending.")
        );
        assert_eq!(
            outcome_message(&SaveOutcome::Saved { count: 2, held: 3 }).as_deref(),
            Some("Saved 2 planned supply changes. 3 edits outside the current view are still pending.")
        );
        let failed = SaveOutcome::Failed {
            saved: 1,
            failed: 2,
            error: ApiError::Validation("bad value".into()),
        };
        assert_eq!(outcome_message(&failed).as_deref(), Some("Saved 1, failed 2: bad value"));
    }
}
