//! Owned library model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracker_core::types::{AppId, Timestamp};

/// A row from the `owned_games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OwnedGame {
    pub steam_id: String,
    pub app_id: AppId,
    pub game_name: String,
    /// Total playtime in minutes.
    pub playtime_forever: i32,
    pub header_image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting or refreshing an owned game.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertOwnedGame {
    pub app_id: AppId,
    pub game_name: String,
    pub playtime_forever: i32,
    pub header_image: String,
}
