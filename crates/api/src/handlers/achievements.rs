//! Handlers for achievement sync and query.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// PATCH /api/v1/achievements/{steam_id}
///
/// Run a full achievement sync over the player's stored library and return
/// the run report. Responds 502 only when every game failed.
pub async fn sync_achievements(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    auth.ensure_player(&steam_id)?;
    let report = state.achievements.sync_achievements(&steam_id).await?;

    Ok(Json(DataResponse { data: report }))
}

/// GET /api/v1/achievements/{steam_id}
pub async fn get_achievements(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    auth.ensure_player(&steam_id)?;
    let achievements = state.achievements.get_achievements(&steam_id).await?;

    Ok(Json(DataResponse { data: achievements }))
}
