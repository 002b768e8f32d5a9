//! Root wrapper for every page rendered inside a tab.

use super::page_standard::is_known_category;
use leptos::prelude::*;

/// Sets `id` and `data-page-category` on the page root and renders the
/// standard `page__header` with title, optional subtitle and actions.
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a001_product--list"`.
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants.
    category: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    /// Right side of the header.
    #[prop(optional, into)]
    actions: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    if !is_known_category(category) {
        log::warn!("page {page_id} uses unknown category {category}");
    }

    view! {
        <div id=page_id class="page" data-page-category=category>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    {subtitle.map(|s| view! { <p class="page__subtitle">{s}</p> })}
                </div>
                <div class="page__header-right">
                    {actions.map(|a| a.run())}
                </div>
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}
