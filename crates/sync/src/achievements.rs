//! Per-player achievement sync.
//!
//! For each owned game, in order: pause, fetch the three Steam payloads,
//! reconcile them, upsert the batch. Each game ends in a [`GameOutcome`];
//! a bad game never stops the ones after it. The run only fails as a whole
//! when not a single game synced and at least one went wrong.

use serde::Serialize;
use tracker_core::achievements::{reconcile, ReconciledAchievement};
use tracker_core::store::AchievementStore;
use tracker_core::types::{AppId, SteamId};
use tracker_steam::{SteamApi, SteamApiError};

use crate::config::SyncConfig;
use crate::error::{FailedGame, SyncError};
use crate::fetcher::fetch_achievement_data;

// ---------------------------------------------------------------------------
// Per-game outcome
// ---------------------------------------------------------------------------

/// Why a game was skipped without being attempted to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The owned-games row carried no app id.
    MissingAppId,
    /// Steam answered 403 (private profile or restricted stats).
    Forbidden,
    /// Steam answered 429.
    RateLimited,
}

impl SkipReason {
    /// Whether the skip means the game could have synced but did not.
    pub fn is_failure(self) -> bool {
        !matches!(self, Self::MissingAppId)
    }
}

/// Why a game failed.
#[derive(Debug, thiserror::Error)]
pub enum GameFailure {
    #[error("{0}")]
    Upstream(SteamApiError),

    #[error("player progress payload missing")]
    MissingProgress,

    #[error("persistence failed: {0}")]
    Persistence(String),
}

/// Result of syncing one game.
#[derive(Debug)]
pub enum GameOutcome {
    /// Records were reconciled and written.
    Synced { count: u64 },
    /// The schema lists no achievements; nothing to write.
    NoAchievements,
    Skipped(SkipReason),
    Failed(GameFailure),
}

impl GameOutcome {
    /// The failure description recorded on the report, if this outcome
    /// counts as a failure.
    fn failure_cause(&self) -> Option<String> {
        match self {
            Self::Skipped(reason) if reason.is_failure() => Some(match reason {
                SkipReason::Forbidden => "forbidden (HTTP 403)".to_string(),
                _ => "rate limited (HTTP 429)".to_string(),
            }),
            Self::Failed(failure) => Some(failure.to_string()),
            _ => None,
        }
    }
}

/// Map a fetch error onto the outcome taxonomy.
fn classify_upstream(app_id: AppId, err: SteamApiError) -> GameOutcome {
    if err.is_forbidden() {
        tracing::info!(app_id, "Achievements forbidden, skipping game");
        GameOutcome::Skipped(SkipReason::Forbidden)
    } else if err.is_rate_limited() {
        tracing::info!(app_id, "Rate limited by Steam, skipping game");
        GameOutcome::Skipped(SkipReason::RateLimited)
    } else {
        tracing::warn!(app_id, error = %err, "Failed to fetch achievements");
        GameOutcome::Failed(GameFailure::Upstream(err))
    }
}

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// Summary of one sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub player_id: String,
    pub games_total: usize,
    /// Games whose records were written.
    pub synced: usize,
    /// Games without achievements.
    pub empty: usize,
    pub skipped: usize,
    pub failed: usize,
    pub achievements_written: u64,
    /// Every game that did not sync for an upstream or persistence reason.
    pub failures: Vec<FailedGame>,
}

impl SyncReport {
    fn new(steam_id: &SteamId, games_total: usize) -> Self {
        Self {
            player_id: steam_id.to_string(),
            games_total,
            ..Self::default()
        }
    }

    fn record(&mut self, app_id: Option<AppId>, outcome: &GameOutcome) {
        match outcome {
            GameOutcome::Synced { count } => {
                self.synced += 1;
                self.achievements_written += count;
            }
            GameOutcome::NoAchievements => self.empty += 1,
            GameOutcome::Skipped(_) => self.skipped += 1,
            GameOutcome::Failed(_) => self.failed += 1,
        }

        if let (Some(app_id), Some(cause)) = (app_id, outcome.failure_cause()) {
            self.failures.push(FailedGame { app_id, cause });
        }
    }

    fn successes(&self) -> usize {
        self.synced + self.empty
    }
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Achievement sync service over a Steam client and an [`AchievementStore`].
pub struct AchievementSync<S> {
    api: SteamApi,
    store: S,
    config: SyncConfig,
}

impl<S: AchievementStore> AchievementSync<S> {
    pub fn new(api: SteamApi, store: S, config: SyncConfig) -> Self {
        Self { api, store, config }
    }

    /// Refresh every owned game's achievements for `player_id`.
    ///
    /// A malformed id fails before any call is made. An empty library is a
    /// successful no-op. Returns [`SyncError::AllGamesFailed`] only when no
    /// game synced and at least one failed; partial success is success.
    pub async fn sync_achievements(&self, player_id: &str) -> Result<SyncReport, SyncError> {
        let steam_id = SteamId::parse(player_id)?;

        let games = self
            .store
            .find_owned_games(&steam_id)
            .await
            .map_err(SyncError::store)?;

        let mut report = SyncReport::new(&steam_id, games.len());
        if games.is_empty() {
            tracing::info!(steam_id = %steam_id, "No owned games, nothing to sync");
            return Ok(report);
        }

        tracing::info!(steam_id = %steam_id, games = games.len(), "Achievement sync started");

        for game in &games {
            let outcome = match game.app_id {
                Some(app_id) => {
                    self.config.game_delay.wait().await;
                    self.sync_game(&steam_id, app_id).await
                }
                None => {
                    tracing::warn!(steam_id = %steam_id, "Owned game without app id, skipping");
                    GameOutcome::Skipped(SkipReason::MissingAppId)
                }
            };
            report.record(game.app_id, &outcome);
        }

        tracing::info!(
            steam_id = %steam_id,
            synced = report.synced,
            empty = report.empty,
            skipped = report.skipped,
            failed = report.failed,
            written = report.achievements_written,
            "Achievement sync finished",
        );

        if report.successes() == 0 && !report.failures.is_empty() {
            return Err(SyncError::AllGamesFailed {
                failures: report.failures,
            });
        }

        Ok(report)
    }

    /// Fetch, reconcile and persist one game. Never fails; every problem is
    /// folded into the returned outcome.
    pub async fn sync_game(&self, steam_id: &SteamId, app_id: AppId) -> GameOutcome {
        let data =
            match fetch_achievement_data(&self.api, steam_id, app_id, self.config.call_delay).await
            {
                Ok(data) => data,
                Err(e) => return classify_upstream(app_id, e),
            };

        let records = match reconcile(steam_id, app_id, &data) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(app_id, error = %e, "Cannot reconcile achievements");
                return GameOutcome::Failed(GameFailure::MissingProgress);
            }
        };

        if records.is_empty() {
            tracing::debug!(app_id, "No achievements to store");
            return GameOutcome::NoAchievements;
        }

        match self
            .store
            .upsert_achievements(steam_id, app_id, &records)
            .await
        {
            Ok(count) => {
                tracing::debug!(app_id, count, "Achievements synced");
                GameOutcome::Synced { count }
            }
            Err(e) => {
                tracing::error!(app_id, error = %e, "Failed to store achievements");
                GameOutcome::Failed(GameFailure::Persistence(e.to_string()))
            }
        }
    }

    /// Stored achievements for `player_id`, possibly empty.
    pub async fn get_achievements(
        &self,
        player_id: &str,
    ) -> Result<Vec<ReconciledAchievement>, SyncError> {
        let steam_id = SteamId::parse(player_id)?;
        self.store
            .find_achievements(&steam_id)
            .await
            .map_err(SyncError::store)
    }
}
