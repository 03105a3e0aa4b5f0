//! Handlers for a player's owned and recently-played games.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Owned games
// ---------------------------------------------------------------------------

/// PATCH /api/v1/games/{steam_id}
///
/// Refresh the owned library from Steam. Returns the rows written.
pub async fn sync_owned_games(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    auth.ensure_player(&steam_id)?;
    let games = state.library.sync_owned_games(&steam_id).await?;

    Ok(Json(DataResponse { data: games }))
}

/// GET /api/v1/games/{steam_id}
pub async fn list_owned_games(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    auth.ensure_player(&steam_id)?;
    let games = state.library.list_owned_games(&steam_id).await?;

    Ok(Json(DataResponse { data: games }))
}

// ---------------------------------------------------------------------------
// Recently played
// ---------------------------------------------------------------------------

/// PATCH /api/v1/recent-games/{steam_id}
pub async fn sync_recent_games(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    auth.ensure_player(&steam_id)?;
    let games = state.library.sync_recent_games(&steam_id).await?;

    Ok(Json(DataResponse { data: games }))
}

/// GET /api/v1/recent-games/{steam_id}
pub async fn list_recent_games(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    auth.ensure_player(&steam_id)?;
    let games = state.library.list_recent_games(&steam_id).await?;

    Ok(Json(DataResponse { data: games }))
}
