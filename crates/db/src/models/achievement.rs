//! Reconciled achievement model.

use serde::Serialize;
use sqlx::FromRow;
use tracker_core::achievements::ReconciledAchievement;
use tracker_core::types::{AppId, Timestamp};

/// A row from the `achievements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Achievement {
    pub steam_id: String,
    pub app_id: AppId,
    pub api_name: String,
    pub game_name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub icon_url: String,
    pub icon_gray_url: String,
    pub hidden: bool,
    pub achieved: bool,
    /// Unix seconds; `0` when locked.
    pub unlock_time: i64,
    /// Share of all players who unlocked it, `0..=100`.
    pub percent: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Achievement> for ReconciledAchievement {
    fn from(row: Achievement) -> Self {
        Self {
            steam_id: row.steam_id,
            app_id: row.app_id,
            key: row.api_name,
            game_name: row.game_name,
            display_name: row.display_name,
            description: row.description,
            icon_url: row.icon_url,
            icon_gray_url: row.icon_gray_url,
            hidden: row.hidden,
            achieved: row.achieved,
            unlock_timestamp: row.unlock_time,
            percent_unlocked_globally: row.percent,
        }
    }
}
