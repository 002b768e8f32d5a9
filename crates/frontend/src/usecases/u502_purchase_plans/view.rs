use super::api;
use super::edit_dialog::PlanEditDialog;
use crate::shared::api_client::use_api;
use crate::shared::components::select_filter::SelectFilter;
use crate::shared::config::use_config;
use crate::shared::data_table::{upload_action, ColumnDef, StandardDataTable, TableMode};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_state::{error_banner, ListState};
use crate::shared::notify::{alert, confirm};
use crate::shared::number_format::{format_currency, format_quantity};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a003_product_group::aggregate::ProductGroup;
use contracts::projections::common::ALL;
use contracts::shared::api::ListEnvelope;
use contracts::shared::data_table::TableEvent;
use contracts::usecases::u502_purchase_plans::dto::{
    PlanEditForm, PlanQuery, PurchasePlan, PLAN_PAGE_LIMIT,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn columns(
    currency: String,
    on_edit: Callback<PurchasePlan>,
    on_approve: Callback<PurchasePlan>,
) -> Vec<ColumnDef<PurchasePlan>> {
    vec![
        ColumnDef::custom("Plan Date", |p: &PurchasePlan| format_date(&p.plan_date).into_any()),
        ColumnDef::field("SKU", "sku_id").with_class("table__cell--mono"),
        ColumnDef::field("Vendor", "vendor_id"),
        ColumnDef::custom("Suggested", |p: &PurchasePlan| {
            format_quantity(p.suggested_quantity).into_any()
        })
        .with_class("table__cell--number"),
        ColumnDef::custom("Final", |p: &PurchasePlan| {
            let class = if p.is_adjusted() { "qty qty--adjusted" } else { "qty" };
            view! { <span class=class>{format_quantity(p.final_quantity)}</span> }.into_any()
        })
        .with_class("table__cell--number"),
        ColumnDef::custom("Amount", move |p: &PurchasePlan| {
            format_currency(p.total_amount, &currency).into_any()
        })
        .with_class("table__cell--number"),
        ColumnDef::custom("Status", |p: &PurchasePlan| {
            let class = if p.is_approved() {
                "badge badge--success"
            } else {
                "badge badge--warning"
            };
            view! { <span class=class>{p.status.clone()}</span> }.into_any()
        }),
        ColumnDef::field("Notes", "notes"),
        ColumnDef::custom("", move |p: &PurchasePlan| {
            if p.is_approved() {
                return ().into_any();
            }
            let edit_plan = p.clone();
            let approve_plan = p.clone();
            view! {
                <div class="row-actions">
                    <button
                        class="button button--icon"
                        title="Edit"
                        on:click=move |_| on_edit.run(edit_plan.clone())
                    >
                        {icon("edit")}
                    </button>
                    <button
                        class="button button--icon button--success"
                        title="Approve"
                        on:click=move |_| on_approve.run(approve_plan.clone())
                    >
                        {icon("check")}
                    </button>
                </div>
            }
            .into_any()
        })
        .with_class("table__cell--actions"),
    ]
}

#[component]
pub fn PurchasePlansView() -> impl IntoView {
    let api = use_api();
    let config = use_config();
    let state = ListState::<PurchasePlan>::new();
    let search = RwSignal::new(String::new());
    let group = RwSignal::new(ALL.to_string());
    let groups = RwSignal::new(Vec::<(String, String)>::new());
    let editing = RwSignal::new(None::<PlanEditForm>);
    let generating = RwSignal::new(false);
    let total = Signal::derive(move || state.items.with(Vec::len));

    {
        let api = api.clone();
        spawn_local(async move {
            match api.get::<ListEnvelope<ProductGroup>>("/api/data/groups").await {
                Ok(list) => groups.set(
                    list.into_rows()
                        .into_iter()
                        .map(|g| (g.group_id, g.group_name))
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
            let query = PlanQuery::list(&search.get_untracked(), &group.get_untracked());
            state.load(async move { api::fetch_plans(&api, &query).await });
        }
    });
    load.run(());

    // One page of at most PLAN_PAGE_LIMIT plans; only the search text goes back
    // to the backend.
    let on_change = Callback::new(move |event: TableEvent| {
        if let TableEvent::SearchChanged(text) = event {
            search.set(text);
            load.run(());
        }
    });
    Effect::new(move |prev: Option<String>| {
        let value = group.get();
        if prev.is_some_and(|p| p != value) {
            load.run(());
        }
        value
    });

    let on_edit = Callback::new(move |plan: PurchasePlan| {
        editing.set(Some(PlanEditForm::for_plan(&plan)));
    });
    let on_approve = Callback::new({
        let api = api.clone();
        move |plan: PurchasePlan| {
            if !confirm(&plan.approve_prompt()) {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api::approve(&api, plan.id).await {
                    Ok(()) => {
                        log::info!("plan {} approved", plan.id);
                        load.run(());
                    }
                    Err(e) => alert(&format!("Error: {}", e.user_message())),
                }
            });
        }
    });

    let generate = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            generating.set(true);
            spawn_local(async move {
                match api::generate(&api).await {
                    Ok(body) => {
                        let message = body
                            .get("message")
                            .and_then(|m| m.as_str())
                            .unwrap_or("Plans generated")
                            .to_string();
                        alert(&message);
                        load.run(());
                    }
                    Err(e) => alert(&format!("Error: {}", e.user_message())),
                }
                generating.set(false);
            });
        }
    };

    let export = {
        let api = api.clone();
        move |_| {
            let query = PlanQuery::export(&search.get_untracked(), &group.get_untracked());
            if let Err(e) = api::open_export(&api, &query) {
                alert(&e.user_message());
            }
        }
    };

    let on_saved = Callback::new(move |_| {
        editing.set(None);
        load.run(());
    });
    let on_close = Callback::new(move |_| editing.set(None));

    view! {
        <PageFrame
            page_id="u502_purchase_plans--usecase"
            category=PAGE_CAT_USECASE
            title="Purchase Plans"
            subtitle="Review, adjust and approve generated purchase recommendations."
            actions=move || view! {
                <button
                    class="button button--primary"
                    disabled=move || generating.get()
                    on:click=generate.clone()
                >
                    {icon("play")}
                    {move || if generating.get() { "Generating..." } else { "Generate Plans" }}
                </button>
                <button class="button button--secondary" on:click=export.clone()>
                    {icon("download")}
                    "Export Excel"
                </button>
            }
        >
            {error_banner(state.error)}
            <StandardDataTable
                rows=state.items
                columns=columns(config.default_currency.clone(), on_edit, on_approve)
                strategy=TableMode::server(Signal::stored(0), PLAN_PAGE_LIMIT, total, on_change)
                loading=state.loading
                search_placeholder="Search SKU or vendor..."
                on_import=upload_action(api.clone(), api::IMPORT_PATH.to_string(), load)
                import_title="Import Adjusted Plans"
                toolbar=move || view! {
                    <SelectFilter label="Group" value=group options=groups all_label="All groups" />
                }
            />
            {move || editing.get().map(|form| view! {
                <PlanEditDialog form=form on_saved=on_saved on_close=on_close />
            })}
        </PageFrame>
    }
}
