//! Landing page: spend headline and the latest purchase plans.

use crate::dashboards::d400_home::api;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::api_client::use_api;
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_home::dto::{ActivityItem, DEFAULT_CURRENCY};
use contracts::dashboards::d401_purchasing_spend::dto::SpendingKpi;
use leptos::prelude::*;
use leptos::task::spawn_local;

const PLANS_TAB: &str = "u502_purchase_plans";

fn activity_row(item: ActivityItem) -> impl IntoView {
    let amount = format_currency(item.amount(), item.currency());
    let class = format!("badge {}", item.status_class());
    view! {
        <tr class="table__row">
            <td class="table__cell">
                <div class="activity__order">{item.order_id}</div>
                <div class="activity__sku">{item.sku_id}</div>
            </td>
            <td class="table__cell"><span class=class>{item.status}</span></td>
            <td class="table__cell table__cell--number">
                <div>{amount}</div>
                <div class="activity__date">{item.date.unwrap_or_default()}</div>
            </td>
        </tr>
    }
}

#[component]
pub fn HomeDashboard() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();

    // The two cards load independently; one failing leaves the other intact.
    let kpi = RwSignal::new(None::<SpendingKpi>);
    let activity = RwSignal::new(Vec::<ActivityItem>::new());
    let pending_loads = RwSignal::new(2u8);

    {
        let api = api.clone();
        spawn_local(async move {
            match api::fetch_spending(&api).await {
                Ok(analytics) => kpi.set(Some(analytics.kpi)),
                Err(e) => log::warn!("home spend card: {e}"),
            }
            pending_loads.update(|n| *n = n.saturating_sub(1));
        });
    }
    spawn_local(async move {
        match api::fetch_recent_activity(&api).await {
            Ok(items) => activity.set(items),
            Err(e) => log::warn!("home activity feed: {e}"),
        }
        pending_loads.update(|n| *n = n.saturating_sub(1));
    });
    let loading = move || pending_loads.get() > 0;

    let total_spend = move || {
        kpi.with(|k| match k {
            Some(k) => format_currency(k.total_spend, &k.currency),
            None => format_currency(0.0, DEFAULT_CURRENCY),
        })
    };
    let plans = move || {
        let count = kpi.with(|k| k.as_ref().map_or(0, |k| k.total_plans));
        format!("{count} active plans")
    };

    view! {
        <PageFrame
            page_id="d400_home--dashboard"
            category=PAGE_CAT_DASHBOARD
            title="Dashboard Overview"
            subtitle="Daily procurement and sales update."
            actions=move || view! {
                <button
                    class="button button--primary"
                    on:click=move |_| ctx.open_tab(PLANS_TAB, tab_label_for_key(PLANS_TAB))
                >
                    {icon("plus")}
                    "New Plan"
                </button>
            }
        >
            <div class="dashboard-grid">
                <div class="dashboard-kpi">
                    <span class="dashboard-kpi__label">"Total Spend"</span>
                    <Show
                        when=move || !loading()
                        fallback=|| view! { <span class="dashboard-kpi__value">"..."</span> }
                    >
                        <span class="dashboard-kpi__value">{total_spend}</span>
                        <span class="dashboard-kpi__hint">{plans}</span>
                    </Show>
                </div>

                <div class="dashboard-card">
                    <h3 class="dashboard-card__title">"Recent Activity"</h3>
                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Plan / Order ID"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell table__cell--number">"Amount"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                if loading() {
                                    view! {
                                        <tr><td class="table__cell table__cell--empty" colspan="3">"Loading..."</td></tr>
                                    }
                                    .into_any()
                                } else if activity.with(Vec::is_empty) {
                                    view! {
                                        <tr>
                                            <td class="table__cell table__cell--empty" colspan="3">
                                                "No recent activity found."
                                            </td>
                                        </tr>
                                    }
                                    .into_any()
                                } else {
                                    activity.get().into_iter().map(activity_row).collect_view().into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </PageFrame>
    }
}
