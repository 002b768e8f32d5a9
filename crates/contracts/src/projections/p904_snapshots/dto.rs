//! Daily stock snapshots share the opening-stock row shape but are read-only.

pub use crate::projections::p903_inventory::dto::{
    InventoryAggregates as SnapshotAggregates, InventoryItem as SnapshotItem,
    InventoryListResponse as SnapshotListResponse,
};

pub const SNAPSHOT_PAGE_SIZE: usize = 50;
