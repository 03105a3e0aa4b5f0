//! Authenticated HTTP transport for the Steam Web API.
//!
//! [`SteamTransport`] is the seam the sync services depend on: issue a GET
//! against a named [`Endpoint`] with query parameters and get parsed JSON
//! back, or a structured error. [`SteamHttpClient`] implements it with
//! [`reqwest`] and appends the API key to every call.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::SteamConfig;
use crate::error::SteamApiError;

/// Steam Web API endpoints read by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SchemaForGame,
    PlayerAchievements,
    GlobalAchievementPercentages,
    PlayerSummaries,
    OwnedGames,
    RecentlyPlayedGames,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::SchemaForGame => "/ISteamUserStats/GetSchemaForGame/v2/",
            Self::PlayerAchievements => "/ISteamUserStats/GetPlayerAchievements/v1/",
            Self::GlobalAchievementPercentages => {
                "/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v2/"
            }
            Self::PlayerSummaries => "/ISteamUser/GetPlayerSummaries/v0002/",
            Self::OwnedGames => "/IPlayerService/GetOwnedGames/v0001/",
            Self::RecentlyPlayedGames => "/IPlayerService/GetRecentlyPlayedGames/v1/",
        }
    }

    /// Short name for logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::SchemaForGame => "GetSchemaForGame",
            Self::PlayerAchievements => "GetPlayerAchievements",
            Self::GlobalAchievementPercentages => "GetGlobalAchievementPercentagesForApp",
            Self::PlayerSummaries => "GetPlayerSummaries",
            Self::OwnedGames => "GetOwnedGames",
            Self::RecentlyPlayedGames => "GetRecentlyPlayedGames",
        }
    }
}

/// Issue an authenticated GET against a Steam endpoint.
#[async_trait]
pub trait SteamTransport: Send + Sync {
    async fn get_json(
        &self,
        endpoint: Endpoint,
        query: &[(&str, String)],
    ) -> Result<Value, SteamApiError>;
}

/// [`SteamTransport`] over a pooled [`reqwest::Client`].
pub struct SteamHttpClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SteamHttpClient {
    /// Create a client with the configured timeout.
    pub fn new(config: &SteamConfig) -> Result<Self, SteamApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SteamApiError::request)?;
        Ok(Self::with_client(client, config))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &SteamConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Return the response unchanged on success, or a
    /// [`SteamApiError::Status`] carrying the status and body.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, SteamApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SteamApiError::status_error(status.as_u16(), body));
        }
        Ok(response)
    }
}

#[async_trait]
impl SteamTransport for SteamHttpClient {
    async fn get_json(
        &self,
        endpoint: Endpoint,
        query: &[(&str, String)],
    ) -> Result<Value, SteamApiError> {
        tracing::debug!(endpoint = endpoint.name(), ?query, "Steam API request");

        let response = self
            .client
            .get(format!("{}{}", self.base_url, endpoint.path()))
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(SteamApiError::request)?;

        let response = Self::ensure_success(response).await?;
        response
            .json::<Value>()
            .await
            .map_err(SteamApiError::request)
    }
}
