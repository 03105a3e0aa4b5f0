use axum::routing::get;
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Recently-played routes mounted at `/recent-games`.
///
/// ```text
/// GET   /{steam_id}   -> list_recent_games
/// PATCH /{steam_id}   -> sync_recent_games
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{steam_id}",
        get(games::list_recent_games).patch(games::sync_recent_games),
    )
}
