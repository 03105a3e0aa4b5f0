use axum::routing::get;
use axum::Router;

use crate::handlers::achievements;
use crate::state::AppState;

/// Achievement routes mounted at `/achievements`.
///
/// ```text
/// GET   /{steam_id}   -> get_achievements
/// PATCH /{steam_id}   -> sync_achievements
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{steam_id}",
        get(achievements::get_achievements).patch(achievements::sync_achievements),
    )
}
