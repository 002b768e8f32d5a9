use chrono::Datelike;
use contracts::shared::period::{year_options, PeriodSelection, MONTH_NAMES};
use leptos::prelude::*;

use crate::shared::date_utils::today;

/// Year, month and week-of-month selects. Clearing the month clears the week.
#[component]
pub fn PeriodFilter(value: RwSignal<PeriodSelection>) -> impl IntoView {
    let years = year_options(today().year());

    let parse_opt = |raw: String| raw.parse::<u32>().ok();

    view! {
        <div class="period-filter">
            <select
                class="form__select"
                on:change=move |ev| {
                    let year = event_target_value(&ev).parse::<i32>().ok();
                    value.update(|p| p.year = year);
                }
            >
                <option value="" selected=move || value.with(|p| p.year.is_none())>"All years"</option>
                {years.into_iter().map(|y| view! {
                    <option value=y.to_string() selected=move || value.with(|p| p.year == Some(y))>
                        {y.to_string()}
                    </option>
                }).collect_view()}
            </select>
            <select
                class="form__select"
                disabled=move || value.with(|p| p.year.is_none())
                on:change=move |ev| {
                    let month = parse_opt(event_target_value(&ev));
                    value.update(|p| *p = p.with_month(month));
                }
            >
                <option value="" selected=move || value.with(|p| p.month.is_none())>"All months"</option>
                {MONTH_NAMES.iter().enumerate().map(|(i, name)| {
                    let month = i as u32 + 1;
                    view! {
                        <option value=month.to_string() selected=move || value.with(|p| p.month == Some(month))>
                            {*name}
                        </option>
                    }
                }).collect_view()}
            </select>
            <select
                class="form__select"
                disabled=move || value.with(|p| p.month.is_none())
                on:change=move |ev| {
                    let week = parse_opt(event_target_value(&ev));
                    value.update(|p| *p = p.with_week(week));
                }
            >
                <option value="" selected=move || value.with(|p| p.week.is_none())>"All weeks"</option>
                {(1..=4u32).map(|w| view! {
                    <option value=w.to_string() selected=move || value.with(|p| p.week == Some(w))>
                        {format!("Week {w}")}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
