//! Recently-played games model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracker_core::types::{AppId, Timestamp};

/// A row from the `recent_games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecentGame {
    pub steam_id: String,
    pub app_id: AppId,
    pub name: String,
    /// Minutes played in the last two weeks.
    pub playtime_2weeks: i32,
    pub playtime_forever: i32,
    pub header_image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting or refreshing a recently-played game.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertRecentGame {
    pub app_id: AppId,
    pub name: String,
    pub playtime_2weeks: i32,
    pub playtime_forever: i32,
    pub header_image: String,
}
