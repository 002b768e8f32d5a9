//! Read-only dashboard payloads.

pub mod d400_home;
pub mod d401_purchasing_spend;
