//! Shared fakes for sync integration tests.
#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tracker_core::achievements::ReconciledAchievement;
use tracker_core::store::{AchievementStore, OwnedGameRef};
use tracker_core::types::{AppId, SteamId};
use tracker_steam::{Endpoint, SteamApi, SteamApiError, SteamTransport};

pub const PLAYER: &str = "76561197960287930";

pub fn player() -> SteamId {
    SteamId::parse(PLAYER).unwrap()
}

// ---------------------------------------------------------------------------
// Steam transport fake
// ---------------------------------------------------------------------------

/// Canned response for one endpoint call.
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
}

/// Records every call and answers from a `(endpoint, app id)` table.
///
/// Calls without an `appid`/`gameid` parameter are keyed by app id `0`.
#[derive(Default)]
pub struct FakeSteam {
    replies: Mutex<HashMap<(Endpoint, AppId), Reply>>,
    calls: Mutex<Vec<(Endpoint, AppId)>>,
}

impl FakeSteam {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, endpoint: Endpoint, app_id: AppId, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .insert((endpoint, app_id), reply);
    }

    /// Register a game whose three achievement endpoints all succeed.
    pub fn game(&self, app_id: AppId, name: &str, keys: &[&str], unlocked: &[&str]) {
        self.reply(Endpoint::SchemaForGame, app_id, Reply::Json(schema(name, keys)));
        self.reply(
            Endpoint::PlayerAchievements,
            app_id,
            Reply::Json(progress(name, keys, unlocked)),
        );
        self.reply(
            Endpoint::GlobalAchievementPercentages,
            app_id,
            Reply::Json(percentages(keys)),
        );
    }

    pub fn calls(&self) -> Vec<(Endpoint, AppId)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn api(self: &Arc<Self>) -> SteamApi {
        SteamApi::new(self.clone())
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
        self.calls.lock().unwrap().push((endpoint, app_id));

        let reply = self.replies.lock().unwrap().get(&(endpoint, app_id)).cloned();
        match reply {
            Some(Reply::Json(value)) => Ok(value),
            Some(Reply::Status(status)) => Err(SteamApiError::status_error(status, "fake")),
            None => Err(SteamApiError::status_error(404, "no fake reply")),
        }
    }
}

pub fn schema(name: &str, keys: &[&str]) -> Value {
    let achievements: Vec<Value> = keys
        .iter()
        .map(|k| {
            json!({
                "name": k,
                "displayName": format!("{k} title"),
                "description": format!("{k} description"),
                "icon": format!("https://cdn.example/{k}.jpg"),
                "icongray": format!("https://cdn.example/{k}_gray.jpg"),
                "hidden": 0
            })
        })
        .collect();
    json!({ "game": { "gameName": name, "availableGameStats": { "achievements": achievements } } })
}

pub fn progress(name: &str, keys: &[&str], unlocked: &[&str]) -> Value {
    let achievements: Vec<Value> = keys
        .iter()
        .map(|k| {
            let achieved = unlocked.contains(k);
            json!({
                "apiname": k,
                "achieved": if achieved { 1 } else { 0 },
                "unlocktime": if achieved { 1_622_548_800 } else { 0 }
            })
        })
        .collect();
    json!({ "playerstats": { "gameName": name, "achievements": achievements } })
}

pub fn percentages(keys: &[&str]) -> Value {
    let achievements: Vec<Value> = keys
        .iter()
        .enumerate()
        .map(|(i, k)| json!({ "name": k, "percent": 10.0 * (i as f64 + 1.0) }))
        .collect();
    json!({ "achievementpercentages": { "achievements": achievements } })
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
#[error("store unavailable")]
pub struct StoreDown;

type RowKey = (String, AppId, String);

/// [`AchievementStore`] over a `BTreeMap`, with switchable failures.
#[derive(Default)]
pub struct MemoryStore {
    owned: Mutex<Vec<OwnedGameRef>>,
    rows: Mutex<BTreeMap<RowKey, ReconciledAchievement>>,
    upsert_calls: Mutex<usize>,
    failing_apps: Mutex<HashSet<AppId>>,
    owned_games_down: Mutex<bool>,
}

impl MemoryStore {
    pub fn with_games(games: Vec<OwnedGameRef>) -> Arc<Self> {
        let store = Self::default();
        *store.owned.lock().unwrap() = games;
        Arc::new(store)
    }

    pub fn fail_upserts_for(&self, app_id: AppId) {
        self.failing_apps.lock().unwrap().insert(app_id);
    }

    pub fn fail_owned_games(&self) {
        *self.owned_games_down.lock().unwrap() = true;
    }

    pub fn upsert_calls(&self) -> usize {
        *self.upsert_calls.lock().unwrap()
    }

    pub fn rows(&self) -> Vec<ReconciledAchievement> {
        self.rows.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl AchievementStore for MemoryStore {
    type Error = StoreDown;

    async fn find_owned_games(&self, _steam_id: &SteamId) -> Result<Vec<OwnedGameRef>, StoreDown> {
        if *self.owned_games_down.lock().unwrap() {
            return Err(StoreDown);
        }
        Ok(self.owned.lock().unwrap().clone())
    }

    async fn upsert_achievements(
        &self,
        steam_id: &SteamId,
        app_id: AppId,
        records: &[ReconciledAchievement],
    ) -> Result<u64, StoreDown> {
        *self.upsert_calls.lock().unwrap() += 1;
        if self.failing_apps.lock().unwrap().contains(&app_id) {
            return Err(StoreDown);
        }
        let mut rows = self.rows.lock().unwrap();
        for record in records {
            rows.insert(
                (steam_id.to_string(), app_id, record.key.clone()),
                record.clone(),
            );
        }
        Ok(records.len() as u64)
    }

    async fn find_achievements(
        &self,
        steam_id: &SteamId,
    ) -> Result<Vec<ReconciledAchievement>, StoreDown> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.steam_id == steam_id.as_str())
            .cloned()
            .collect())
    }
}
