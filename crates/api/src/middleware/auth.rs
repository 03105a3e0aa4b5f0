//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracker_core::error::CoreError;
use tracker_core::types::SteamId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated player extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// ```ignore
/// async fn my_handler(auth: AuthUser, Path(steam_id): Path<String>) -> AppResult<Json<()>> {
///     auth.ensure_player(&steam_id)?;
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The player's Steam id (from `claims.sub`).
    pub steam_id: SteamId,
}

impl AuthUser {
    /// Reject requests that act on another player's data.
    pub fn ensure_player(&self, steam_id: &str) -> Result<(), AppError> {
        if self.steam_id.as_str() != steam_id {
            return Err(AppError::Core(CoreError::Forbidden(
                "Token does not belong to this player".into(),
            )));
        }
        Ok(())
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let steam_id = SteamId::parse(&claims.sub).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid token subject".into()))
        })?;

        Ok(AuthUser { steam_id })
    }
}
