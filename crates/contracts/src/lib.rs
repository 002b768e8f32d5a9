//! Wire types and UI-independent logic of the planning frontend.
//!
//! Everything here compiles for the native target so the table, matrix and
//! export logic can be tested without a browser.

pub mod dashboards;
pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
pub mod usecases;
