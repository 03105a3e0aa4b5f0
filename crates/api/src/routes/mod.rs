pub mod achievements;
pub mod auth;
pub mod games;
pub mod health;
pub mod profiles;
pub mod recent_games;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/steam                          Steam OpenID redirect (public)
/// /auth/steam/callback                 OpenID verification + JWT (public)
///
/// /profiles/{steam_id}                 get, sync (PATCH)
/// /games/{steam_id}                    list owned, sync (PATCH)
/// /recent-games/{steam_id}             list recent, sync (PATCH)
/// /achievements/{steam_id}             list, sync (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profiles", profiles::router())
        .nest("/games", games::router())
        .nest("/recent-games", recent_games::router())
        .nest("/achievements", achievements::router())
}
