//! Steam OpenID login handlers.
//!
//! The login endpoint redirects the browser to Steam. Steam sends it back to
//! the callback with a signed assertion; once Steam confirms the assertion
//! we issue a JWT and hand it to the frontend in the redirect query string.

use axum::extract::{Query, State};
use axum::response::Redirect;
use tracker_steam::openid::{login_redirect_url, OpenIdError};

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/auth/steam
pub async fn steam_login(State(state): State<AppState>) -> AppResult<Redirect> {
    let url = login_redirect_url(&state.config.steam_callback_url(), &state.config.backend_url)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(Redirect::to(&url))
}

/// GET /api/v1/auth/steam/callback
///
/// Always redirects to the frontend, with either `steamId` and `token` or an
/// `error` code in the query string.
pub async fn steam_callback(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Redirect {
    let frontend = &state.config.frontend_url;

    let steam_id = match state
        .openid
        .verify(&params, &state.config.steam_callback_url())
        .await
    {
        Ok(steam_id) => steam_id,
        Err(e) => {
            tracing::warn!(error = %e, "Steam login failed");
            return Redirect::to(&format!("{frontend}/?error={}", login_error_code(&e)));
        }
    };

    match generate_access_token(&steam_id, &state.config.jwt) {
        Ok(token) => {
            tracing::info!(steam_id = %steam_id, "Steam login succeeded");
            Redirect::to(&format!("{frontend}/?steamId={steam_id}&token={token}"))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to issue access token");
            Redirect::to(&format!("{frontend}/?error=server_error"))
        }
    }
}

/// Query-string error code the frontend shows for a failed login.
fn login_error_code(err: &OpenIdError) -> &'static str {
    match err {
        OpenIdError::InvalidClaimedId(_) => "invalid_claimed_id",
        OpenIdError::NotAnAssertion(_)
        | OpenIdError::MissingParam(_)
        | OpenIdError::ReturnToMismatch
        | OpenIdError::Rejected => "auth_failed",
        OpenIdError::Request(_) | OpenIdError::Status(_) | OpenIdError::Url(_) => "server_error",
    }
}
