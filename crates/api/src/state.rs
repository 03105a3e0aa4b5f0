use std::sync::Arc;

use tracker_db::PgAchievementStore;
use tracker_steam::openid::SteamOpenId;
use tracker_steam::SteamApi;
use tracker_sync::{AchievementSync, LibrarySync, SyncConfig};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tracker_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Profile and library sync.
    pub library: LibrarySync,
    /// Achievement sync and query.
    pub achievements: Arc<AchievementSync<PgAchievementStore>>,
    /// Steam OpenID assertion verifier.
    pub openid: SteamOpenId,
}

impl AppState {
    /// Wire the sync services over one Steam client and the pool.
    pub fn new(
        pool: tracker_db::DbPool,
        config: ServerConfig,
        steam: SteamApi,
        openid: SteamOpenId,
        sync_config: SyncConfig,
    ) -> Self {
        let library = LibrarySync::new(steam.clone(), pool.clone(), sync_config);
        let achievements = AchievementSync::new(
            steam,
            PgAchievementStore::new(pool.clone()),
            sync_config,
        );

        Self {
            pool,
            config: Arc::new(config),
            library,
            achievements: Arc::new(achievements),
            openid,
        }
    }
}
