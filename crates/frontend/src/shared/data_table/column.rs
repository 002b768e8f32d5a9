use contracts::shared::data_table::TableRow;
use leptos::prelude::*;
use std::sync::Arc;

type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// One table column: a header plus either a field accessor or a renderer.
pub struct ColumnDef<T> {
    pub header: &'static str,
    pub accessor: Option<&'static str>,
    pub cell: Option<CellRenderer<T>>,
    pub class: &'static str,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header,
            accessor: self.accessor,
            cell: self.cell.clone(),
            class: self.class,
        }
    }
}

impl<T: TableRow> ColumnDef<T> {
    /// Column showing the stringified serialized field `accessor`.
    pub fn field(header: &'static str, accessor: &'static str) -> Self {
        Self {
            header,
            accessor: Some(accessor),
            cell: None,
            class: "",
        }
    }

    pub fn custom<F>(header: &'static str, render: F) -> Self
    where
        F: Fn(&T) -> AnyView + Send + Sync + 'static,
    {
        Self {
            header,
            accessor: None,
            cell: Some(Arc::new(render)),
            class: "",
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    pub fn render(&self, row: &T) -> AnyView {
        match (&self.cell, self.accessor) {
            (Some(render), _) => render(row),
            (None, Some(key)) => row.field(key).unwrap_or_default().into_any(),
            (None, None) => ().into_any(),
        }
    }

    pub fn cell_class(&self) -> String {
        if self.class.is_empty() {
            "table__cell".to_string()
        } else {
            format!("table__cell {}", self.class)
        }
    }
}
