use crate::shared::icons::icon;
use leptos::prelude::*;

const WINDOW: usize = 5;

/// Page numbers (0-based) shown around `current`, at most `WINDOW` wide.
fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.min(total_pages - 1);
    let start = current
        .saturating_sub(WINDOW / 2)
        .min(total_pages.saturating_sub(WINDOW));
    (start..(start + WINDOW).min(total_pages)).collect()
}

/// First / previous / numbered / next / last buttons for the table footer.
#[component]
pub fn PaginationControls(
    /// 0-based
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() + 1 >= total_pages.get();
    let go = move |page: usize| {
        if page != current_page.get_untracked() && page < total_pages.get_untracked() {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button class="pagination-btn" title="First page" disabled=at_start on:click=move |_| go(0)>
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Previous"
                disabled=at_start
                on:click=move |_| go(current_page.get_untracked().saturating_sub(1))
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get())
                    .into_iter()
                    .map(|page| view! {
                        <button
                            class="pagination-btn"
                            class:pagination-btn--active=page == current
                            on:click=move |_| go(page)
                        >
                            {(page + 1).to_string()}
                        </button>
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                title="Next"
                disabled=at_end
                on:click=move |_| go(current_page.get_untracked() + 1)
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Last page"
                disabled=at_end
                on:click=move |_| go(total_pages.get_untracked().saturating_sub(1))
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window() {
        assert!(page_window(0, 0).is_empty());
        assert_eq!(page_window(0, 3), vec![0, 1, 2]);
        assert_eq!(page_window(0, 10), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(9, 10), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_window(42, 10), vec![5, 6, 7, 8, 9]);
    }
}
