pub mod api;
pub mod csv_export;
pub mod data_table;
pub mod period;
