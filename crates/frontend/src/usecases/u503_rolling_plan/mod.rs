pub mod api;
pub mod matrix_table;
pub mod view;
