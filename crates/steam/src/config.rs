use std::time::Duration;

/// Default Steam Web API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.steampowered.com";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error)]
pub enum SteamConfigError {
    #[error("Steam API key not found in environment variables (STEAM_API_KEY)")]
    MissingApiKey,

    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Steam Web API client configuration.
#[derive(Debug, Clone)]
pub struct SteamConfig {
    /// Web API key sent as the `key` query parameter on every call.
    pub api_key: String,
    /// Base URL without trailing slash (default: [`DEFAULT_BASE_URL`]).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl SteamConfig {
    /// Build a config with default base URL and timeout.
    ///
    /// Fails if `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SteamConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SteamConfigError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var                   | Required | Default                        |
    /// |---------------------------|----------|--------------------------------|
    /// | `STEAM_API_KEY`           | **yes**  | --                             |
    /// | `STEAM_API_BASE_URL`      | no       | `https://api.steampowered.com` |
    /// | `STEAM_HTTP_TIMEOUT_SECS` | no       | `15`                           |
    pub fn from_env() -> Result<Self, SteamConfigError> {
        let api_key = std::env::var("STEAM_API_KEY").unwrap_or_default();
        let mut config = Self::new(api_key)?;

        if let Ok(base_url) = std::env::var("STEAM_API_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(raw) = std::env::var("STEAM_HTTP_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| SteamConfigError::Invalid {
                var: "STEAM_HTTP_TIMEOUT_SECS",
                expected: "u64",
                value: raw.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
