//! Rolling supply plan: weekly buckets per SKU, monthly rollups and the
//! pending-edit overlay of planned supply.

pub mod dto;
pub mod export;
pub mod matrix;
pub mod overlay;

pub use dto::{
    MatrixQuery, PlannedSupplyUpdate, PlanningProfile, ProductHit, ProductSearchQuery, RollingRecord, RunRequest,
    StockStatus,
};
pub use export::{matrix_csv, MatrixView};
pub use matrix::{date_key, DateWindow, MatrixRow, MonthlyAggregate, RollingMatrix};
pub use overlay::{EditOverlay, SaveOutcome};
