use crate::dashboards::d401_purchasing_spend::api;
use crate::shared::api_client::use_api;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_currency, format_number_with_decimals};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d401_purchasing_spend::dto::{spend_bars, SpendSlice, SpendingAnalytics};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Ranked horizontal bars; width follows the largest slice.
fn spend_chart(title: &'static str, hint: &'static str, slices: &[SpendSlice], currency: &str) -> impl IntoView {
    let bars = spend_bars(slices);
    let body = if bars.is_empty() {
        view! { <div class="dashboard-card__empty">"No spend recorded."</div> }.into_any()
    } else {
        bars.into_iter()
            .map(|bar| {
                view! {
                    <div class="spend-bar" title=format_currency(bar.value, currency)>
                        <span class="spend-bar__label">{bar.label}</span>
                        <div class="spend-bar__track">
                            <div class="spend-bar__fill" style:width=format!("{:.1}%", bar.width)></div>
                        </div>
                        <span class="spend-bar__share">
                            {format!("{}%", format_number_with_decimals(bar.share, 1))}
                        </span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="dashboard-card">
            <h3 class="dashboard-card__title">{title}</h3>
            <p class="dashboard-card__hint">{hint}</p>
            {body}
        </div>
    }
}

#[component]
pub fn PurchasingSpendDashboard() -> impl IntoView {
    let api = use_api();
    let (data, set_data) = signal(None::<SpendingAnalytics>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = Callback::new(move |_| {
        let api = api.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_spending(&api).await {
                Ok(analytics) => {
                    set_data.set(Some(analytics));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("spending analytics load failed: {e}");
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    });
    load.run(());

    view! {
        <PageFrame
            page_id="d401_purchasing_spend--dashboard"
            category=PAGE_CAT_DASHBOARD
            title="Purchasing Intelligence"
            subtitle="Planned spend by category and supplier."
            actions=move || view! {
                <button
                    class="button button--secondary"
                    disabled=move || loading.get()
                    on:click=move |_| load.run(())
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">"Error: " {e}</div> })}
            {move || match data.get() {
                None if loading.get() => view! { <div class="page__loading">"Loading..."</div> }.into_any(),
                None => ().into_any(),
                Some(analytics) => {
                    let currency = analytics.kpi.currency.clone();
                    view! {
                        <div class="dashboard-kpis">
                            <div class="dashboard-kpi">
                                <span class="dashboard-kpi__label">"Total Spend (Planned)"</span>
                                <span class="dashboard-kpi__value">
                                    {format_currency(analytics.kpi.total_spend, &currency)}
                                </span>
                            </div>
                            <div class="dashboard-kpi">
                                <span class="dashboard-kpi__label">"Active Plans"</span>
                                <span class="dashboard-kpi__value">{analytics.kpi.total_plans.to_string()}</span>
                            </div>
                        </div>
                        <div class="dashboard-grid">
                            {spend_chart(
                                "Spend by Category",
                                "Top spending product categories.",
                                &analytics.charts.spend_by_category,
                                &currency,
                            )}
                            {spend_chart(
                                "Vendor Distribution",
                                "Spending breakdown by top suppliers.",
                                &analytics.charts.spend_by_vendor,
                                &currency,
                            )}
                        </div>
                    }
                    .into_any()
                }
            }}
        </PageFrame>
    }
}
