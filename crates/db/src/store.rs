//! [`AchievementStore`] over PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use tracker_core::achievements::ReconciledAchievement;
use tracker_core::store::{AchievementStore, OwnedGameRef};
use tracker_core::types::{AppId, SteamId};

use crate::repositories::{AchievementRepo, OwnedGameRepo};

/// Achievement persistence backed by the `owned_games` and `achievements`
/// tables.
#[derive(Clone)]
pub struct PgAchievementStore {
    pool: PgPool,
}

impl PgAchievementStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AchievementStore for PgAchievementStore {
    type Error = sqlx::Error;

    async fn find_owned_games(&self, steam_id: &SteamId) -> Result<Vec<OwnedGameRef>, sqlx::Error> {
        let games = OwnedGameRepo::list_by_steam_id(&self.pool, steam_id.as_str()).await?;
        Ok(games
            .into_iter()
            .map(|game| OwnedGameRef::new(game.app_id))
            .collect())
    }

    async fn upsert_achievements(
        &self,
        steam_id: &SteamId,
        app_id: AppId,
        records: &[ReconciledAchievement],
    ) -> Result<u64, sqlx::Error> {
        let written =
            AchievementRepo::upsert_batch(&self.pool, steam_id.as_str(), app_id, records).await?;
        tracing::debug!(steam_id = %steam_id, app_id, written, "Achievements upserted");
        Ok(written)
    }

    async fn find_achievements(
        &self,
        steam_id: &SteamId,
    ) -> Result<Vec<ReconciledAchievement>, sqlx::Error> {
        let rows = AchievementRepo::list_by_steam_id(&self.pool, steam_id.as_str()).await?;
        Ok(rows.into_iter().map(ReconciledAchievement::from).collect())
    }
}
