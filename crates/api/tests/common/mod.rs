#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use tracker_api::auth::jwt::{generate_access_token, JwtConfig};
use tracker_api::config::ServerConfig;
use tracker_api::router::build_app_router;
use tracker_api::state::AppState;
use tracker_core::types::{AppId, SteamId};
use tracker_steam::openid::SteamOpenId;
use tracker_steam::{Endpoint, SteamApi, SteamApiError, SteamTransport};
use tracker_sync::SyncConfig;

pub const PLAYER: &str = "76561197960287930";
pub const OTHER_PLAYER: &str = "76561198000000001";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        request_timeout_secs: 30,
        backend_url: "http://localhost:3000".to_string(),
        frontend_url: "http://localhost:8080".to_string(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Steam transport answering from a `(endpoint, app id)` table.
///
/// Calls without an `appid`/`gameid` parameter are keyed by app id `0`.
/// Anything unregistered answers 404.
#[derive(Default)]
pub struct FakeSteam {
    replies: Mutex<HashMap<(Endpoint, AppId), Result<Value, u16>>>,
}

impl FakeSteam {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn json(&self, endpoint: Endpoint, app_id: AppId, body: Value) {
        self.replies
            .lock()
            .unwrap()
            .insert((endpoint, app_id), Ok(body));
    }

    pub fn status(&self, endpoint: Endpoint, app_id: AppId, status: u16) {
        self.replies
            .lock()
            .unwrap()
            .insert((endpoint, app_id), Err(status));
    }
}

#[async_trait]
impl SteamTransport for FakeSteam {
    async fn get_json(
        &self,
        endpoint: Endpoint,
        query: &[(&str, String)],
    ) -> Result<Value, SteamApiError> {
        let app_id = query
            .iter()
            .find(|(k, _)| *k == "appid" || *k == "gameid")
            .and_then(|(_, v)| v.parse().ok())
            .unwrap_or(0);

        match self.replies.lock().unwrap().get(&(endpoint, app_id)).cloned() {
            Some(Ok(body)) => Ok(body),
            Some(Err(status)) => Err(SteamApiError::status_error(status, "fake")),
            None => Err(SteamApiError::status_error(404, "no fake reply")),
        }
    }
}

/// Build the full application router over the given pool and Steam fake.
pub fn build_test_app_with(pool: PgPool, steam: Arc<FakeSteam>) -> Router {
    let config = test_config();
    let state = AppState::new(
        pool,
        config.clone(),
        SteamApi::new(steam),
        SteamOpenId::new(reqwest::Client::new()),
        SyncConfig::immediate(),
    );
    build_app_router(state, &config)
}

/// Build the full application router with a Steam fake that knows nothing.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, FakeSteam::new())
}

/// A valid access token for `steam_id`.
pub fn token_for(steam_id: &str) -> String {
    let steam_id = SteamId::parse(steam_id).unwrap();
    generate_access_token(&steam_id, &test_config().jwt).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Send an unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a request with a Bearer token for `steam_id`.
pub async fn send_as(app: Router, method: Method, uri: &str, steam_id: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token_for(steam_id)))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_as(app: Router, uri: &str, steam_id: &str) -> Response<Body> {
    send_as(app, Method::GET, uri, steam_id).await
}

pub async fn patch_as(app: Router, uri: &str, steam_id: &str) -> Response<Body> {
    send_as(app, Method::PATCH, uri, steam_id).await
}
