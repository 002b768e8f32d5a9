use contracts::shared::data_table::{
    DataTableFilter, FilterSelection, PageView, TableEvent, TableQuery, TableRow,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

use super::actions::ActionFuture;
use super::column::ColumnDef;
use super::import_dialog::ImportDialog;
use super::mode::TableMode;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon;
use crate::shared::notify::{confirm, DELETE_CONFIRM};

const SKELETON_ROWS: usize = 5;

/// Paginated, searchable, facet-filtered table.
///
/// Every user action goes through [`PaginationStrategy::dispatch`]; in server
/// mode the resulting event reaches the owner through `on_change` once per
/// action (search is debounced first). Toolbar and row controls render only
/// when their handler is given.
///
/// [`PaginationStrategy::dispatch`]: contracts::shared::data_table::PaginationStrategy::dispatch
#[component]
pub fn StandardDataTable<T>(
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] description: Option<&'static str>,
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<ColumnDef<T>>,
    strategy: TableMode,
    #[prop(into, optional)] loading: Signal<bool>,
    /// Facets offered as checkbox groups.
    #[prop(into, optional)]
    filters: Signal<Vec<DataTableFilter>>,
    #[prop(optional)] search_placeholder: Option<&'static str>,
    #[prop(optional)] on_sync: Option<Callback<(), ActionFuture>>,
    #[prop(optional)] on_cancel_sync: Option<Callback<(), ActionFuture>>,
    #[prop(optional)] on_import: Option<Callback<File, ActionFuture>>,
    #[prop(optional, into)] import_title: Option<String>,
    #[prop(optional)] on_export: Option<Callback<()>>,
    #[prop(optional)] on_add: Option<Callback<()>>,
    #[prop(optional)] on_edit: Option<Callback<T>>,
    #[prop(optional)] on_delete: Option<Callback<T, ActionFuture>>,
    /// Extra controls placed after the built-in toolbar buttons.
    #[prop(optional, into)]
    toolbar: Option<ViewFn>,
    /// Rendered as the last body row, e.g. page totals.
    #[prop(optional, into)]
    footer: Option<ViewFn>,
) -> impl IntoView
where
    T: TableRow + Clone + Send + Sync + 'static,
{
    let mode = strategy;
    let query = RwSignal::new(TableQuery::default());
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let column_count = columns.len() + usize::from(has_actions);
    let columns = StoredValue::new(columns);

    let dispatch = move |event: TableEvent| {
        let strategy = mode.strategy_untracked();
        let mut forwarded = None;
        query.update(|q| forwarded = strategy.dispatch(q, event));
        if let Some(event) = forwarded {
            mode.forward(event);
        }
    };

    let page_view: Signal<PageView<T>> = Signal::derive(move || {
        let strategy = mode.strategy();
        query.with(|q| rows.with(|r| strategy.view(r, q)))
    });

    // Search
    let search_text = RwSignal::new(String::new());
    let debouncer = Debouncer::new(use_config().search_debounce_ms);
    let is_server = matches!(mode, TableMode::Server { .. });
    Effect::new(move |prev: Option<String>| {
        let text = search_text.get();
        if prev.is_some_and(|p| p != text) {
            let event = TableEvent::SearchChanged(text.clone());
            if is_server {
                debouncer.run(move || dispatch(event));
            } else {
                dispatch(event);
            }
        }
        text
    });

    // Toolbar state
    let syncing = RwSignal::new(false);
    let cancelling = RwSignal::new(false);
    let show_import = RwSignal::new(false);
    let deleting = RwSignal::new(None::<String>);
    let import_title = import_title.unwrap_or_else(|| "Import Data".to_string());

    let render_row = move |row: T| {
        let key = row.row_key();
        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|col| view! { <td class=col.cell_class()>{col.render(&row)}</td> })
                .collect_view()
        });
        let actions = has_actions.then(|| {
            let edit_row = row.clone();
            let delete_row = row.clone();
            let delete_key = key.clone();
            view! {
                <td class="table__cell table__cell--actions">
                    <div class="row-actions">
                        {on_edit.map(|cb| view! {
                            <button
                                class="button button--icon"
                                title="Edit"
                                on:click=move |_| cb.run(edit_row.clone())
                            >
                                {icon("edit")}
                            </button>
                        })}
                        {on_delete.map(|cb| {
                            let is_deleting = {
                                let key = delete_key.clone();
                                move || deleting.with(|d| d.as_deref() == Some(key.as_str()))
                            };
                            view! {
                                <button
                                    class="button button--icon button--danger"
                                    title="Delete"
                                    disabled=is_deleting
                                    on:click=move |_| {
                                        if !confirm(DELETE_CONFIRM) {
                                            return;
                                        }
                                        deleting.set(Some(delete_key.clone()));
                                        let pending = cb.run(delete_row.clone());
                                        spawn_local(async move {
                                            if let Err(e) = pending.await {
                                                log::warn!("delete failed: {e}");
                                            }
                                            deleting.set(None);
                                        });
                                    }
                                >
                                    {icon("delete")}
                                </button>
                            }
                        })}
                    </div>
                </td>
            }
        });
        view! {
            <tr class="table__row" data-row-key=key>
                {cells}
                {actions}
            </tr>
        }
    };

    let body = move || {
        if loading.get() {
            return (0..SKELETON_ROWS)
                .map(|_| view! {
                    <tr class="table__row table__row--skeleton">
                        {(0..column_count).map(|_| view! {
                            <td class="table__cell"><div class="skeleton"></div></td>
                        }).collect_view()}
                    </tr>
                })
                .collect_view()
                .into_any();
        }
        let view = page_view.get();
        if view.rows.is_empty() {
            view! {
                <tr>
                    <td class="table__cell table__cell--empty" colspan=column_count.to_string()>
                        "No results found."
                    </td>
                </tr>
            }
            .into_any()
        } else {
            view.rows.into_iter().map(render_row).collect_view().into_any()
        }
    };

    let active_filters = Signal::derive(move || query.with(|q| q.filters.active_count()));

    view! {
        <div class="data-table">
            {(title.is_some() || description.is_some()).then(|| view! {
                <div class="data-table__heading">
                    {title.map(|t| view! { <h2 class="data-table__title">{t}</h2> })}
                    {description.map(|d| view! { <p class="data-table__description">{d}</p> })}
                </div>
            })}
            <div class="data-table__toolbar">
                <div class="data-table__search">
                    {icon("search")}
                    <Input value=search_text placeholder=search_placeholder.unwrap_or("Search...") />
                </div>
                <div class="data-table__facets">
                    {move || filters.get().into_iter().map(|facet| {
                        view! { <FacetFilter facet=facet query=query on_change=Callback::new(dispatch) /> }
                    }).collect_view()}
                    <Show when=move || active_filters.get() != 0>
                        <button
                            class="button button--link"
                            on:click=move |_| dispatch(TableEvent::FiltersChanged(FilterSelection::new()))
                        >
                            "Clear filters"
                        </button>
                    </Show>
                </div>
                <div class="data-table__actions">
                    {on_sync.map(|cb| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || syncing.get())
                            on_click=move |_| run_pending(syncing, cb.run(()))
                        >
                            {icon("refresh")}
                            {move || if syncing.get() { "Syncing..." } else { "Sync" }}
                        </Button>
                    })}
                    {on_cancel_sync.map(|cb| view! {
                        <Button
                            appearance=ButtonAppearance::Subtle
                            disabled=Signal::derive(move || cancelling.get())
                            on_click=move |_| run_pending(cancelling, cb.run(()))
                        >
                            {icon("x")}
                            "Cancel Sync"
                        </Button>
                    })}
                    {on_import.is_some().then(|| view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_import.set(true)>
                            {icon("upload")}
                            "Import"
                        </Button>
                    })}
                    {on_export.map(|cb| view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| cb.run(())>
                            {icon("download")}
                            "Export"
                        </Button>
                    })}
                    {on_add.map(|cb| view! {
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| cb.run(())>
                            {icon("plus")}
                            "Add New"
                        </Button>
                    })}
                    {toolbar.map(|extra| extra.run())}
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns.with_value(|cols| cols.iter().map(|col| view! {
                                <th class="table__header-cell">{col.header}</th>
                            }).collect_view())}
                            {has_actions.then(|| view! {
                                <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                            })}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                    {footer.map(|totals| view! {
                        <tfoot class="table__foot">{totals.run()}</tfoot>
                    })}
                </table>
            </div>

            <div class="data-table__footer">
                <span class="data-table__summary">{move || page_view.with(PageView::summary)}</span>
                <PaginationControls
                    current_page=Signal::derive(move || page_view.with(|v| v.page))
                    total_pages=Signal::derive(move || page_view.with(|v| v.total_pages))
                    on_page_change=Callback::new(move |page| dispatch(TableEvent::PageChanged(page)))
                />
            </div>

            {on_import.map(|cb| {
                let title = import_title.clone();
                view! {
                    <Show when=move || show_import.get()>
                        <ImportDialog
                            title=title.clone()
                            on_upload=cb
                            on_close=Callback::new(move |_| show_import.set(false))
                        />
                    </Show>
                }
            })}
        </div>
    }
}

#[component]
fn FacetFilter(
    facet: DataTableFilter,
    query: RwSignal<TableQuery>,
    on_change: Callback<TableEvent>,
) -> impl IntoView {
    let key = StoredValue::new(facet.key);
    let selected_count = move || {
        key.with_value(|k| query.with(|q| q.filters.selected(k).map_or(0, |s| s.len())))
    };

    view! {
        <details class="facet-filter">
            <summary class="facet-filter__title">
                {icon("filter")}
                {facet.title}
                {move || match selected_count() {
                    0 => None,
                    n => Some(view! { <span class="badge badge--primary">{n}</span> }),
                }}
            </summary>
            <div class="facet-filter__options">
                {facet.options.into_iter().map(|option| {
                    let value = StoredValue::new(option.value);
                    view! {
                        <label class="facet-filter__option">
                            <input
                                type="checkbox"
                                prop:checked=move || key.with_value(|k| value.with_value(|v| {
                                    query.with(|q| q.filters.is_selected(k, v))
                                }))
                                on:change=move |_| {
                                    let mut next = query.with_untracked(|q| q.filters.clone());
                                    key.with_value(|k| value.with_value(|v| next.toggle(k, v)));
                                    on_change.run(TableEvent::FiltersChanged(next));
                                }
                            />
                            <span>{option.label}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </details>
    }
}

fn run_pending(flag: RwSignal<bool>, pending: ActionFuture) {
    flag.set(true);
    spawn_local(async move {
        if let Err(e) = pending.await {
            log::warn!("toolbar action failed: {e}");
        }
        flag.set(false);
    });
}
