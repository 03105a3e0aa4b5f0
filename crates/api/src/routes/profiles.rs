use axum::routing::get;
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// Profile routes mounted at `/profiles`.
///
/// ```text
/// GET   /{steam_id}   -> get_profile
/// PATCH /{steam_id}   -> sync_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{steam_id}",
        get(profiles::get_profile).patch(profiles::sync_profile),
    )
}
