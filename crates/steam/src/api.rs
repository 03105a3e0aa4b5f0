//! Typed calls over a [`SteamTransport`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracker_core::types::{AppId, SteamId};

use crate::error::SteamApiError;
use crate::payloads::{
    GamesResponse, GlobalPercentagesResponse, PlayerAchievementsResponse,
    PlayerSummariesResponse, SchemaResponse,
};
use crate::transport::{Endpoint, SteamTransport};

/// Steam Web API client. Cheap to clone.
#[derive(Clone)]
pub struct SteamApi {
    transport: Arc<dyn SteamTransport>,
}

impl SteamApi {
    pub fn new(transport: Arc<dyn SteamTransport>) -> Self {
        Self { transport }
    }

    /// `GetSchemaForGame`: achievement definitions for a game.
    pub async fn schema_for_game(&self, app_id: AppId) -> Result<SchemaResponse, SteamApiError> {
        self.fetch(Endpoint::SchemaForGame, &[("appid", app_id.to_string())])
            .await
    }

    /// `GetPlayerAchievements`: one player's progress in one game.
    pub async fn player_achievements(
        &self,
        steam_id: &SteamId,
        app_id: AppId,
    ) -> Result<PlayerAchievementsResponse, SteamApiError> {
        self.fetch(
            Endpoint::PlayerAchievements,
            &[
                ("steamid", steam_id.to_string()),
                ("appid", app_id.to_string()),
            ],
        )
        .await
    }

    /// `GetGlobalAchievementPercentagesForApp`: unlock rate per achievement.
    pub async fn global_achievement_percentages(
        &self,
        app_id: AppId,
    ) -> Result<GlobalPercentagesResponse, SteamApiError> {
        self.fetch(
            Endpoint::GlobalAchievementPercentages,
            &[("gameid", app_id.to_string())],
        )
        .await
    }

    /// `GetPlayerSummaries` for a single player.
    pub async fn player_summaries(
        &self,
        steam_id: &SteamId,
    ) -> Result<PlayerSummariesResponse, SteamApiError> {
        self.fetch(Endpoint::PlayerSummaries, &[("steamids", steam_id.to_string())])
            .await
    }

    /// `GetOwnedGames`, including app info and played free games.
    pub async fn owned_games(&self, steam_id: &SteamId) -> Result<GamesResponse, SteamApiError> {
        self.fetch(
            Endpoint::OwnedGames,
            &[
                ("steamid", steam_id.to_string()),
                ("include_appinfo", "true".to_string()),
                ("include_played_free_games", "true".to_string()),
            ],
        )
        .await
    }

    /// `GetRecentlyPlayedGames` (last two weeks).
    pub async fn recently_played_games(
        &self,
        steam_id: &SteamId,
    ) -> Result<GamesResponse, SteamApiError> {
        self.fetch(
            Endpoint::RecentlyPlayedGames,
            &[("steamid", steam_id.to_string())],
        )
        .await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, String)],
    ) -> Result<T, SteamApiError> {
        let value = self.transport.get_json(endpoint, query).await?;
        serde_json::from_value(value).map_err(|source| SteamApiError::Decode {
            endpoint: endpoint.name(),
            source,
        })
    }
}
