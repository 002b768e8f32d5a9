use super::api;
use crate::shared::api_client::use_api;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::notify::alert;
use crate::shared::number_format::format_quantity;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a001_product::aggregate::Product;
use contracts::usecases::u501_demand_forecast::dto::{
    latest, series_peak, ForecastModel, ForecastPoint, ForecastRequest,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

const TABLE_ROWS: usize = 20;

fn bar_height(value: Option<f64>, peak: f64) -> String {
    let pct = match value {
        Some(v) if peak > 0.0 => (v / peak * 100.0).clamp(0.0, 100.0),
        _ => 0.0,
    };
    format!("height: {pct:.1}%")
}

#[component]
fn ForecastChart(points: Signal<Vec<ForecastPoint>>) -> impl IntoView {
    view! {
        <div class="forecast-chart">
            {move || {
                points.with(|pts| {
                    let peak = series_peak(pts);
                    pts.iter()
                        .map(|p| {
                            let title = format!(
                                "{}: actual {}, forecast {}",
                                p.date,
                                p.actual.map(format_quantity).unwrap_or_else(|| "-".into()),
                                p.forecast.map(format_quantity).unwrap_or_else(|| "-".into()),
                            );
                            view! {
                                <div class="forecast-chart__slot" title=title>
                                    <div
                                        class="forecast-chart__bar forecast-chart__bar--actual"
                                        style=bar_height(p.actual, peak)
                                    ></div>
                                    <div
                                        class="forecast-chart__bar forecast-chart__bar--forecast"
                                        style=bar_height(p.forecast, peak)
                                    ></div>
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
        <div class="forecast-chart__legend">
            <span class="legend legend--actual">"Actual"</span>
            <span class="legend legend--forecast">"Forecast"</span>
        </div>
    }
}

#[component]
pub fn DemandForecastView() -> impl IntoView {
    let api = use_api();
    let products = RwSignal::new(Vec::<Product>::new());
    let selected_sku = RwSignal::new(String::new());
    let model = RwSignal::new(ForecastModel::default());
    let history = RwSignal::new(Vec::<ForecastPoint>::new());
    let running = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    {
        let api = api.clone();
        spawn_local(async move {
            match api::fetch_products(&api).await {
                Ok(list) => {
                    if let Some(first) = list.first() {
                        selected_sku.set(first.sku_id.clone());
                    }
                    products.set(list);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    }

    let load_history = {
        let api = api.clone();
        move |sku: String| {
            let api = api.clone();
            spawn_local(async move {
                match api::fetch_history(&api, &sku).await {
                    Ok(points) => {
                        history.set(points);
                        error.set(None);
                    }
                    Err(e) => {
                        log::warn!("forecast history for {sku} failed: {e}");
                        history.set(Vec::new());
                        error.set(Some(e.user_message()));
                    }
                }
            });
        }
    };

    Effect::new({
        let load_history = load_history.clone();
        move |_| {
            let sku = selected_sku.get();
            if !sku.is_empty() {
                load_history(sku);
            }
        }
    });

    let run = move |_| {
        let sku = selected_sku.get_untracked();
        if sku.is_empty() {
            alert("Select a product first.");
            return;
        }
        let request = ForecastRequest::new(&sku, model.get_untracked());
        let api = api.clone();
        let load_history = load_history.clone();
        running.set(true);
        spawn_local(async move {
            match api::run_forecast(&api, &request).await {
                Ok(result) => {
                    log::info!("forecast {} ({}) done", request.sku_id, request.model.code());
                    alert(&result.summary());
                    load_history(request.sku_id);
                }
                Err(e) => alert(&format!("Error: {}", e.user_message())),
            }
            running.set(false);
        });
    };

    let recent = move || history.with(|pts| latest(pts, TABLE_ROWS).to_vec());

    view! {
        <PageFrame
            page_id="u501_demand_forecast--usecase"
            category=PAGE_CAT_USECASE
            title="Demand Forecast"
            subtitle="Run a moving-average forecast for one product."
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="forecast-controls">
                <div class="form__group">
                    <label class="form__label">"Product"</label>
                    <select
                        class="form__select"
                        prop:value=move || selected_sku.get()
                        on:change=move |ev| selected_sku.set(event_target_value(&ev))
                    >
                        <For
                            each=move || products.get()
                            key=|p| p.sku_id.clone()
                            children=move |p| {
                                let label = format!("{} - {}", p.sku_id, p.product_name);
                                view! { <option value=p.sku_id>{label}</option> }
                            }
                        />
                    </select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Model"</label>
                    <select
                        class="form__select"
                        prop:value=move || model.get().code()
                        on:change=move |ev| model.set(ForecastModel::from_code(&event_target_value(&ev)))
                    >
                        {ForecastModel::ALL
                            .iter()
                            .map(|m| view! { <option value=m.code()>{m.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <button
                    class="button button--primary"
                    disabled=move || running.get()
                    on:click=run
                >
                    {icon("play")}
                    {move || if running.get() { "Running..." } else { "Run Forecast" }}
                </button>
            </div>

            <ForecastChart points=history.into() />

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Date"</th>
                        <th class="table__header-cell">"Actual"</th>
                        <th class="table__header-cell">"Forecast"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=recent
                        key=|p| p.date.clone()
                        children=|p| view! {
                            <tr class="table__row">
                                <td class="table__cell">{format_date(&p.date)}</td>
                                <td class="table__cell table__cell--number">
                                    {p.actual.map(format_quantity).unwrap_or_else(|| "-".into())}
                                </td>
                                <td class="table__cell table__cell--number">
                                    {p.forecast.map(format_quantity).unwrap_or_else(|| "-".into())}
                                </td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
        </PageFrame>
    }
}
