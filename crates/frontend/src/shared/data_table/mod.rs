//! Generic table used by every list page.
//!
//! Rows are any [`TableRow`](contracts::shared::data_table::TableRow). Paging
//! and filtering run either locally ([`TableMode::Client`]) or on the backend
//! ([`TableMode::Server`]), in which case the table only forwards events.

pub mod actions;
pub mod column;
pub mod import_dialog;
pub mod mode;
pub mod table;

pub use actions::{
    cancel_sync_action, delete_action, export_action, import_action, sync_action, trigger_action,
    upload_action, ActionFuture,
};
pub use column::ColumnDef;
pub use import_dialog::ImportDialog;
pub use mode::TableMode;
pub use table::StandardDataTable;
