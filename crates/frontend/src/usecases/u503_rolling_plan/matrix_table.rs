//! Product-by-period grid of the rolling supply plan.
//!
//! Weekly columns show one bucket per cell with an editable planned supply;
//! monthly columns show the rolled-up figures read only, pending edits included.

use crate::shared::date_utils::{format_bucket_date, format_month_key};
use crate::shared::notify::alert;
use crate::shared::number_format::{format_number_int, format_quantity};
use contracts::usecases::u503_rolling_plan::{
    EditOverlay, MatrixRow, MatrixView, MonthlyAggregate, RollingMatrix, RollingRecord,
};
use leptos::prelude::*;

#[component]
pub fn MatrixTable(
    matrix: Memo<RollingMatrix>,
    overlay: RwSignal<EditOverlay>,
    view_mode: RwSignal<MatrixView>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    move || {
        let mode = view_mode.get();
        let data = matrix.get();
        let columns = match mode {
            MatrixView::Weekly => data.dates.clone(),
            MatrixView::Monthly => data.months.clone(),
        };
        let span = columns.len() + 2;

        let body = if loading.get() {
            view! {
                <tr><td class="table__cell table__cell--empty" colspan=span>"Loading..."</td></tr>
            }
            .into_any()
        } else if data.is_empty() {
            view! {
                <tr>
                    <td class="table__cell table__cell--empty" colspan=span>
                        "No plan data. Run the calculation first."
                    </td>
                </tr>
            }
            .into_any()
        } else {
            data.rows
                .iter()
                .map(|row| matrix_row(row, &columns, mode, overlay))
                .collect_view()
                .into_any()
        };

        view! {
            <div class="matrix">
                <table class="table__data matrix__table">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell matrix__sticky matrix__sticky--sku">"SKU"</th>
                            <th class="table__header-cell matrix__sticky matrix__sticky--name">"Product"</th>
                            {columns.iter().map(|col| {
                                let title = match mode {
                                    MatrixView::Weekly => format_bucket_date(col),
                                    MatrixView::Monthly => format_month_key(col),
                                };
                                view! {
                                    <th class="table__header-cell matrix__period">
                                        {title}
                                        <span class="matrix__period-kind">{mode.label()}</span>
                                    </th>
                                }
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        }
    }
}

fn matrix_row(
    row: &MatrixRow,
    columns: &[String],
    mode: MatrixView,
    overlay: RwSignal<EditOverlay>,
) -> impl IntoView {
    let cells = columns
        .iter()
        .map(|col| match mode {
            MatrixView::Weekly => match row.cell(col) {
                Some(record) => weekly_cell(record.clone(), col.clone(), overlay).into_any(),
                None => empty_cell().into_any(),
            },
            MatrixView::Monthly => match row.month(col) {
                Some(agg) => {
                    let records = row.cells_in_month(col).cloned().collect();
                    monthly_cell(agg, records, overlay).into_any()
                }
                None => empty_cell().into_any(),
            },
        })
        .collect_view();

    view! {
        <tr class="table__row">
            <td class="table__cell table__cell--mono matrix__sticky matrix__sticky--sku">{row.sku_id.clone()}</td>
            <td
                class="table__cell matrix__sticky matrix__sticky--name"
                title=row.product_name.clone()
            >
                {row.product_name.clone()}
            </td>
            {cells}
        </tr>
    }
}

fn empty_cell() -> impl IntoView {
    view! { <td class="table__cell matrix-cell matrix-cell--empty">"-"</td> }
}

fn weekly_cell(record: RollingRecord, date: String, overlay: RwSignal<EditOverlay>) -> impl IntoView {
    let class = format!("table__cell matrix-cell {}", record.stock_status().css_class());
    let sku = record.sku_id.clone();
    let edited = {
        let (sku, date) = (sku.clone(), date.clone());
        move || overlay.with(|o| o.is_edited(&sku, &date))
    };
    let shown = {
        let record = record.clone();
        move || overlay.with(|o| o.display_planned(&record)).to_string()
    };
    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target_value(&ev);
        let result = overlay.try_update(|o| o.set_input(&sku, &date, &input));
        if let Some(Err(e)) = result {
            alert(&e.user_message());
            // re-render the input with the last accepted value
            overlay.update(|_| {});
        }
    };

    view! {
        <td class=class class:matrix-cell--edited=edited>
            <div class="matrix-cell__line" title="Closing Stock">
                "C: " {format_number_int(record.closing)}
            </div>
            {(record.net_req > 0.0).then(|| view! {
                <div class="matrix-cell__buy">"Buy: " {format_number_int(record.net_req)}</div>
            })}
            <div class="matrix-cell__hint">"Fc: " {format_number_int(record.forecast)}</div>
            <input
                class="matrix-cell__input"
                type="number"
                min="0"
                title="Planned Supply"
                prop:value=shown
                on:change=on_change
            />
        </td>
    }
}

/// `records` are the weekly buckets of the month, so the plan figure follows
/// pending edits.
fn monthly_cell(
    agg: &MonthlyAggregate,
    records: Vec<RollingRecord>,
    overlay: RwSignal<EditOverlay>,
) -> impl IntoView {
    let planned = move || format_quantity(overlay.with(|o| o.planned_sum(&records)));

    view! {
        <td class="table__cell matrix-cell matrix-cell--month">
            <div class="matrix-cell__line" title="Closing Stock">"C: " {format_number_int(agg.closing)}</div>
            {(agg.net_req > 0.0).then(|| view! {
                <div class="matrix-cell__buy">"Buy: " {format_number_int(agg.net_req)}</div>
            })}
            <div class="matrix-cell__hint">
                "Fc: " {format_number_int(agg.forecast)} " / In: " {format_number_int(agg.incoming)}
            </div>
            <div class="matrix-cell__hint">"Plan: " {planned}</div>
        </td>
    }
}
