//! Steam profile model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracker_core::types::Timestamp;

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub steam_id: String,
    pub persona_name: String,
    pub profile_url: String,
    pub avatar_full: String,
    pub loc_country_code: Option<String>,
    /// Account creation time, Unix seconds.
    pub time_created: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting or refreshing a profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertProfile {
    pub steam_id: String,
    pub persona_name: String,
    pub profile_url: String,
    pub avatar_full: String,
    pub loc_country_code: Option<String>,
    pub time_created: Option<i64>,
}
