//! Steam OpenID 2.0 login.
//!
//! Steam is the identity provider: the browser is sent to
//! [`STEAM_OPENID_LOGIN_URL`] with a `checkid_setup` request, comes back to
//! our `return_to` URL with a signed positive assertion, and we ask Steam to
//! confirm it with a `check_authentication` request. The claimed id carries
//! the player's 64-bit Steam id.

use std::sync::LazyLock;

use regex::Regex;
use tracker_core::types::SteamId;

/// Steam's OpenID provider endpoint.
pub const STEAM_OPENID_LOGIN_URL: &str = "https://steamcommunity.com/openid/login";

const OPENID_NS: &str = "http://specs.openid.net/auth/2.0";
const IDENTIFIER_SELECT: &str = "http://specs.openid.net/auth/2.0/identifier_select";

static CLAIMED_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://steamcommunity\.com/openid/id/(\d{17})/?$").expect("valid regex")
});

#[derive(Debug, thiserror::Error)]
pub enum OpenIdError {
    #[error("Not a positive OpenID assertion (openid.mode = {0:?})")]
    NotAnAssertion(Option<String>),

    #[error("Missing OpenID parameter: {0}")]
    MissingParam(&'static str),

    #[error("openid.return_to does not match this server")]
    ReturnToMismatch,

    #[error("Steam rejected the assertion")]
    Rejected,

    #[error("Invalid claimed id: {0}")]
    InvalidClaimedId(String),

    #[error("Steam OpenID request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Steam OpenID returned status {0}")]
    Status(u16),

    #[error("Invalid URL: {0}")]
    Url(String),
}

/// URL to send the browser to for a Steam login.
pub fn login_redirect_url(return_to: &str, realm: &str) -> Result<String, OpenIdError> {
    let url = reqwest::Url::parse_with_params(
        STEAM_OPENID_LOGIN_URL,
        &[
            ("openid.ns", OPENID_NS),
            ("openid.mode", "checkid_setup"),
            ("openid.return_to", return_to),
            ("openid.realm", realm),
            ("openid.identity", IDENTIFIER_SELECT),
            ("openid.claimed_id", IDENTIFIER_SELECT),
        ],
    )
    .map_err(|e| OpenIdError::Url(e.to_string()))?;
    Ok(url.into())
}

/// Extract the Steam id from an `openid.claimed_id` value.
pub fn extract_steam_id(claimed_id: &str) -> Result<SteamId, OpenIdError> {
    let caps = CLAIMED_ID_RE
        .captures(claimed_id)
        .ok_or_else(|| OpenIdError::InvalidClaimedId(claimed_id.to_string()))?;
    SteamId::parse(&caps[1]).map_err(|_| OpenIdError::InvalidClaimedId(claimed_id.to_string()))
}

fn param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

/// Verifies Steam OpenID assertions.
#[derive(Clone)]
pub struct SteamOpenId {
    client: reqwest::Client,
    login_url: String,
}

impl SteamOpenId {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            login_url: STEAM_OPENID_LOGIN_URL.to_string(),
        }
    }

    /// Check the assertion parameters received on the callback and return
    /// the authenticated Steam id.
    ///
    /// The assertion must be a positive `id_res` response addressed to
    /// `expected_return_to`, ignoring any query string. Every `openid.*` parameter is echoed back to
    /// Steam with `openid.mode=check_authentication`.
    pub async fn verify(
        &self,
        params: &[(String, String)],
        expected_return_to: &str,
    ) -> Result<SteamId, OpenIdError> {
        let mode = param(params, "openid.mode");
        if mode != Some("id_res") {
            return Err(OpenIdError::NotAnAssertion(mode.map(str::to_string)));
        }

        let return_to =
            param(params, "openid.return_to").ok_or(OpenIdError::MissingParam("openid.return_to"))?;
        let return_path = return_to.split_once('?').map_or(return_to, |(path, _)| path);
        if return_path != expected_return_to {
            return Err(OpenIdError::ReturnToMismatch);
        }

        let claimed_id = param(params, "openid.claimed_id")
            .ok_or(OpenIdError::MissingParam("openid.claimed_id"))?;
        let steam_id = extract_steam_id(claimed_id)?;

        let form: Vec<(&str, &str)> = params
            .iter()
            .filter(|(k, _)| k.starts_with("openid.") && k != "openid.mode")
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .chain(std::iter::once(("openid.mode", "check_authentication")))
            .collect();

        let response = self.client.post(&self.login_url).form(&form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(OpenIdError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        if !body.lines().any(|line| line.trim() == "is_valid:true") {
            tracing::warn!(steam_id = %steam_id, "Steam rejected OpenID assertion");
            return Err(OpenIdError::Rejected);
        }

        Ok(steam_id)
    }
}
