//! Persistence seam used by the achievement sync.
//!
//! The PostgreSQL implementation lives in the db crate; tests use in-memory
//! fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::achievements::ReconciledAchievement;
use crate::types::{AppId, SteamId};

/// A game a player owns, as recorded by the library sync.
///
/// `app_id` is optional because upstream library rows are not trusted to
/// carry one; the achievement sync skips rows without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedGameRef {
    pub app_id: Option<AppId>,
}

impl OwnedGameRef {
    pub fn new(app_id: AppId) -> Self {
        Self {
            app_id: Some(app_id),
        }
    }
}

/// Read and upsert access to achievement rows keyed by
/// `(steam_id, app_id, key)`.
#[async_trait]
pub trait AchievementStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// The player's owned games, in storage order.
    async fn find_owned_games(&self, steam_id: &SteamId) -> Result<Vec<OwnedGameRef>, Self::Error>;

    /// Insert or overwrite every record of one game for one player.
    ///
    /// Returns the number of rows written. The batch is applied atomically.
    async fn upsert_achievements(
        &self,
        steam_id: &SteamId,
        app_id: AppId,
        records: &[ReconciledAchievement],
    ) -> Result<u64, Self::Error>;

    /// All stored achievement rows for the player.
    async fn find_achievements(
        &self,
        steam_id: &SteamId,
    ) -> Result<Vec<ReconciledAchievement>, Self::Error>;
}

#[async_trait]
impl<T: AchievementStore + ?Sized> AchievementStore for std::sync::Arc<T> {
    type Error = T::Error;

    async fn find_owned_games(&self, steam_id: &SteamId) -> Result<Vec<OwnedGameRef>, Self::Error> {
        (**self).find_owned_games(steam_id).await
    }

    async fn upsert_achievements(
        &self,
        steam_id: &SteamId,
        app_id: AppId,
        records: &[ReconciledAchievement],
    ) -> Result<u64, Self::Error> {
        (**self).upsert_achievements(steam_id, app_id, records).await
    }

    async fn find_achievements(
        &self,
        steam_id: &SteamId,
    ) -> Result<Vec<ReconciledAchievement>, Self::Error> {
        (**self).find_achievements(steam_id).await
    }
}
