use std::fmt;

use serde::Serialize;
use tracker_core::error::CoreError;
use tracker_core::types::AppId;
use tracker_steam::SteamApiError;

/// One game that did not sync, with a human-readable cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedGame {
    pub app_id: AppId,
    pub cause: String,
}

impl fmt::Display for FailedGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "app {}: {}", self.app_id, self.cause)
    }
}

fn join_failures(failures: &[FailedGame]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that fail a whole achievement sync or query.
///
/// Per-game problems never surface here individually; they are collected
/// into the [`crate::SyncReport`] and only escape as
/// [`SyncError::AllGamesFailed`] when nothing synced.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// The store failed outside any per-game step (loading owned games or
    /// reading achievements back). The store's own error is kept as-is.
    #[error(transparent)]
    Store(Box<dyn std::error::Error + Send + Sync>),

    #[error("Achievement sync failed for every game: {}", join_failures(.failures))]
    AllGamesFailed { failures: Vec<FailedGame> },
}

impl SyncError {
    pub(crate) fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(err))
    }
}

/// Errors from the profile and library syncs.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Upstream(#[from] SteamApiError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_message_names_every_game() {
        let err = SyncError::AllGamesFailed {
            failures: vec![
                FailedGame {
                    app_id: 400,
                    cause: "forbidden".to_string(),
                },
                FailedGame {
                    app_id: 620,
                    cause: "timeout".to_string(),
                },
            ],
        };
        let message = err.to_string();
        assert!(message.contains("app 400: forbidden"), "{message}");
        assert!(message.contains("app 620: timeout"), "{message}");
    }
}
