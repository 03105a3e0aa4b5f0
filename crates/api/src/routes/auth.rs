//! Steam login routes mounted at `/auth`.

use axum::routing::get;
use axum::Router;

use crate::handlers::steam_auth;
use crate::state::AppState;

/// ```text
/// GET /steam            -> steam_login
/// GET /steam/callback   -> steam_callback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/steam", get(steam_auth::steam_login))
        .route("/steam/callback", get(steam_auth::steam_callback))
}
