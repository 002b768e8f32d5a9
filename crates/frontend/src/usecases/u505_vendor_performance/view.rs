use super::api;
use crate::shared::api_client::use_api;
use crate::shared::config::use_config;
use crate::shared::data_table::{ColumnDef, StandardDataTable, TableMode};
use crate::shared::icons::icon;
use crate::shared::list_state::{error_banner, ListState};
use crate::shared::notify::alert;
use crate::shared::number_format::format_number_with_decimals;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::usecases::u505_vendor_performance::dto::{PerformanceSummary, VendorScore};
use leptos::prelude::*;
use leptos::task::spawn_local;

const CHART_TOP: usize = 5;

fn metric(value: Option<f64>, decimals: usize, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{unit}", format_number_with_decimals(v, decimals)),
        None => "--".to_string(),
    }
}

fn columns() -> Vec<ColumnDef<VendorScore>> {
    vec![
        ColumnDef::custom("Rank", |v: &VendorScore| format!("#{}", v.rank).into_any()),
        ColumnDef::field("Vendor", "vendor_name"),
        ColumnDef::custom("Score", |v: &VendorScore| {
            let class = format!("badge {}", v.tier().css_class());
            view! { <span class=class>{format_number_with_decimals(v.score, 1)}</span> }.into_any()
        })
        .with_class("table__cell--number"),
        ColumnDef::custom("Quality", |v: &VendorScore| metric(v.quality, 1, "%").into_any())
            .with_class("table__cell--number"),
        ColumnDef::custom("Lead Time", |v: &VendorScore| metric(v.lead_time, 1, "d").into_any())
            .with_class("table__cell--number"),
        ColumnDef::custom("Delay Rate", |v: &VendorScore| metric(v.delay_percent(), 0, "%").into_any())
            .with_class("table__cell--number"),
    ]
}

/// Quality and composite score side by side for the best vendors.
fn top_chart(ranking: &[VendorScore]) -> impl IntoView {
    ranking
        .iter()
        .take(CHART_TOP)
        .map(|v| {
            let quality = v.quality.unwrap_or_default().clamp(0.0, 100.0);
            let score = v.score.clamp(0.0, 100.0);
            view! {
                <div class="score-chart__row">
                    <span class="score-chart__label">{v.vendor_name.clone()}</span>
                    <div class="score-chart__bars">
                        <div class="score-chart__bar score-chart__bar--quality" style:width=format!("{quality}%")></div>
                        <div class="score-chart__bar score-chart__bar--score" style:width=format!("{score}%")></div>
                    </div>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn VendorPerformanceView() -> impl IntoView {
    let api = use_api();
    let config = use_config();
    let state = ListState::<VendorScore>::new();
    let mocking = RwSignal::new(false);

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            state.load(async move { api::fetch_ranking(&api).await });
        }
    });
    load.run(());

    let simulate = move |_| {
        let api = api.clone();
        mocking.set(true);
        spawn_local(async move {
            match api::generate_mock(&api).await {
                Ok(result) => {
                    alert(&result.summary());
                    load.run(());
                }
                Err(e) => {
                    log::error!("vendor performance mock failed: {e}");
                    alert("Error generating data");
                }
            }
            mocking.set(false);
        });
    };

    let summary = Memo::new(move |_| state.items.with(|r| PerformanceSummary::from_ranking(r)));

    view! {
        <PageFrame
            page_id="u505_vendor_performance--usecase"
            category=PAGE_CAT_USECASE
            title="Supplier 360°"
            subtitle="Performance evaluation based on quality, lead time and reliability."
            actions=move || view! {
                <button
                    class="button button--secondary"
                    disabled=move || mocking.get()
                    on:click=simulate.clone()
                >
                    {icon("play")}
                    {move || if mocking.get() { "Generating..." } else { "Simulate Data (Demo)" }}
                </button>
                <button
                    class="button button--secondary"
                    disabled=move || state.loading.get()
                    on:click=move |_| load.run(())
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            }
        >
            {error_banner(state.error)}
            <div class="dashboard-kpis">
                <div class="dashboard-kpi">
                    <span class="dashboard-kpi__label">"Top Vendor Score"</span>
                    <span class="dashboard-kpi__value">{move || metric(summary.get().top_score, 1, "")}</span>
                </div>
                <div class="dashboard-kpi">
                    <span class="dashboard-kpi__label">"Avg Lead Time"</span>
                    <span class="dashboard-kpi__value">{move || metric(summary.get().avg_lead_time, 1, " days")}</span>
                </div>
                <div class="dashboard-kpi">
                    <span class="dashboard-kpi__label">"Quality Index"</span>
                    <span class="dashboard-kpi__value">{move || metric(summary.get().avg_quality, 1, "%")}</span>
                </div>
                <div class="dashboard-kpi">
                    <span class="dashboard-kpi__label">"Reliability Risk"</span>
                    <span class="dashboard-kpi__value">{move || metric(summary.get().avg_delay_percent, 1, "%")}</span>
                </div>
            </div>

            <div class="dashboard-grid">
                <StandardDataTable
                    title="Vendor Ranking"
                    description="Composite score based on Quality (60%) and Reliability (40%)."
                    rows=state.items
                    columns=columns()
                    strategy=TableMode::client(config.client_page_size)
                    loading=state.loading
                    search_placeholder="Search vendor..."
                />
                <div class="dashboard-card">
                    <h3 class="dashboard-card__title">"Top 5 Performance Breakdown"</h3>
                    <p class="dashboard-card__hint">"Quality vs. composite score"</p>
                    {move || state.items.with(|r| top_chart(r))}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_placeholder() {
        assert_eq!(metric(None, 1, "%"), "--");
        assert_eq!(metric(Some(92.456), 1, "%"), "92.5%");
        assert_eq!(metric(Some(7.0), 1, " days"), "7.0 days");
    }
}
