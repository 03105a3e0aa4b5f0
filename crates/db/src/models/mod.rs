//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` upsert DTO built from Steam payloads

pub mod achievement;
pub mod owned_game;
pub mod profile;
pub mod recent_game;
