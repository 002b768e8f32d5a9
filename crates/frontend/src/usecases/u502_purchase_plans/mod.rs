pub mod api;
pub mod edit_dialog;
pub mod view;
