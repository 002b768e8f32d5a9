use contracts::shared::data_table::{PaginationStrategy, TableEvent};
use leptos::prelude::*;

/// How the table gets its pages.
///
/// `Server` carries the owner's current page and total; the owner refetches
/// whenever `on_change` fires.
#[derive(Clone, Copy)]
pub enum TableMode {
    Client {
        page_size: usize,
    },
    Server {
        page: Signal<usize>,
        page_size: usize,
        total_count: Signal<usize>,
        on_change: Callback<TableEvent>,
    },
}

impl TableMode {
    pub fn client(page_size: usize) -> Self {
        TableMode::Client { page_size }
    }

    pub fn server(
        page: impl Into<Signal<usize>>,
        page_size: usize,
        total_count: impl Into<Signal<usize>>,
        on_change: Callback<TableEvent>,
    ) -> Self {
        TableMode::Server {
            page: page.into(),
            page_size,
            total_count: total_count.into(),
            on_change,
        }
    }

    /// Tracks the server signals when read inside a reactive scope.
    pub fn strategy(&self) -> PaginationStrategy {
        match self {
            TableMode::Client { page_size } => PaginationStrategy::client(*page_size),
            TableMode::Server {
                page,
                page_size,
                total_count,
                ..
            } => PaginationStrategy::server(page.get(), *page_size, total_count.get()),
        }
    }

    /// Snapshot for event handlers.
    pub fn strategy_untracked(&self) -> PaginationStrategy {
        match self {
            TableMode::Client { page_size } => PaginationStrategy::client(*page_size),
            TableMode::Server {
                page,
                page_size,
                total_count,
                ..
            } => PaginationStrategy::server(
                page.get_untracked(),
                *page_size,
                total_count.get_untracked(),
            ),
        }
    }

    pub fn forward(&self, event: TableEvent) {
        if let TableMode::Server { on_change, .. } = self {
            on_change.run(event);
        }
    }
}
