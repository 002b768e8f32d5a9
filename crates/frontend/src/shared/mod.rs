pub mod api_client;
pub mod components;
pub mod config;
pub mod data_table;
pub mod date_utils;
pub mod debounce;
pub mod export;
pub mod icons;
pub mod list_state;
pub mod modal_frame;
pub mod notify;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
