//! Data model behind the generic table: row access, facet filters and the
//! two pagination strategies.
//!
//! Client mode owns the whole dataset and derives the visible page locally.
//! Server mode renders exactly what the owner supplied and hands every user
//! action back so the owner can re-fetch.

pub mod filter;
pub mod pagination;
pub mod row;

pub use filter::{DataTableFilter, FilterOption, FilterSelection};
pub use pagination::{
    ClientPaging, PageView, PaginationStrategy, ServerPaging, TableEvent, TableQuery,
};
pub use row::{display_value, TableRow};
