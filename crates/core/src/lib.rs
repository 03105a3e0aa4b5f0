//! Domain types and pure logic for the Steam tracker.
//!
//! This crate has no internal dependencies so it can be shared by the
//! Steam client, the sync services, the repository layer, and the API.

pub mod achievements;
pub mod error;
pub mod rate_limit;
pub mod store;
pub mod types;
