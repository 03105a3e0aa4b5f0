//! Handlers for Steam profile snapshots.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// PATCH /api/v1/profiles/{steam_id}
///
/// Refresh the profile from Steam and return the stored row.
pub async fn sync_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    auth.ensure_player(&steam_id)?;
    let profile = state.library.sync_profile(&steam_id).await?;

    Ok(Json(DataResponse { data: profile }))
}

/// GET /api/v1/profiles/{steam_id}
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    auth.ensure_player(&steam_id)?;
    let profile = state.library.get_profile(&steam_id).await?;

    Ok(Json(DataResponse { data: profile }))
}
