use axum::routing::get;
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Owned-library routes mounted at `/games`.
///
/// ```text
/// GET   /{steam_id}   -> list_owned_games
/// PATCH /{steam_id}   -> sync_owned_games
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{steam_id}",
        get(games::list_owned_games).patch(games::sync_owned_games),
    )
}
