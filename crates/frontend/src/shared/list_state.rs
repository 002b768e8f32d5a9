use contracts::shared::api::ApiError;
use contracts::shared::data_table::TableEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Rows of one list page plus its load status.
pub struct ListState<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T: Send + Sync + 'static> ListState<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Replaces the rows with the fetch result. Overlapping loads are not
    /// coordinated; whichever answers last is shown.
    pub fn load<F>(&self, fetch: F)
    where
        F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match fetch.await {
                Ok(rows) => {
                    this.items.set(rows);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("list load failed: {e}");
                    this.error.set(Some(e.user_message()));
                }
            }
            this.loading.set(false);
        });
    }
}

impl<T: Send + Sync + 'static> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline error banner used by list pages.
pub fn error_banner(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|e| view! { <div class="alert alert--error">{e}</div> })
    }
}

/// Page, server total and search text of a server-mode list.
#[derive(Clone, Copy)]
pub struct ServerCursor {
    pub page: RwSignal<usize>,
    pub total: RwSignal<usize>,
    pub search: RwSignal<String>,
}

impl ServerCursor {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(0),
            total: RwSignal::new(0),
            search: RwSignal::new(String::new()),
        }
    }

    /// Folds a table event into the cursor. Any change other than paging
    /// starts again from the first page.
    pub fn apply(&self, event: &TableEvent) {
        match event {
            TableEvent::PageChanged(page) => self.page.set(*page),
            TableEvent::SearchChanged(text) => {
                self.search.set(text.clone());
                self.page.set(0);
            }
            TableEvent::FiltersChanged(_) => self.page.set(0),
        }
    }

    /// Calls `reload` from page 0 whenever `filter` changes after mount.
    pub fn reset_on_change<V>(&self, filter: impl Fn() -> V + 'static, reload: Callback<()>)
    where
        V: PartialEq + Clone + 'static,
    {
        let page = self.page;
        Effect::new(move |prev: Option<V>| {
            let value = filter();
            if prev.is_some_and(|p| p != value) {
                page.set(0);
                reload.run(());
            }
            value
        });
    }
}

impl Default for ServerCursor {
    fn default() -> Self {
        Self::new()
    }
}
