pub mod database_settings;
pub mod integrations;
pub mod planning_settings;
pub mod seasonal;
