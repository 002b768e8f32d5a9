//! Settings, integrations and the ERP sync/import vocabulary.

pub mod database;
pub mod integrations;
pub mod planning_settings;
pub mod seasonal;
pub mod sync;
