use tracker_core::rate_limit::DelayWindow;

/// Default lower bound of both delay windows, in milliseconds.
const DEFAULT_DELAY_MIN_MS: u64 = 200;

/// Default upper bound of both delay windows, in milliseconds.
const DEFAULT_DELAY_MAX_MS: u64 = 500;

#[derive(Debug, thiserror::Error)]
#[error("{var} must be a non-negative integer (milliseconds), got '{value}'")]
pub struct SyncConfigError {
    pub var: &'static str,
    pub value: String,
}

/// Pacing of Steam calls during a sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncConfig {
    /// Pause before each game's first call.
    pub game_delay: DelayWindow,
    /// Pause between the calls made for one game.
    pub call_delay: DelayWindow,
}

impl Default for SyncConfig {
    fn default() -> Self {
        let window = DelayWindow::new(DEFAULT_DELAY_MIN_MS, DEFAULT_DELAY_MAX_MS);
        Self {
            game_delay: window,
            call_delay: window,
        }
    }
}

impl SyncConfig {
    /// No pauses at all. Used by tests.
    pub const fn immediate() -> Self {
        Self {
            game_delay: DelayWindow::NONE,
            call_delay: DelayWindow::NONE,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var                  | Default |
    /// |--------------------------|---------|
    /// | `SYNC_GAME_DELAY_MIN_MS` | `200`   |
    /// | `SYNC_GAME_DELAY_MAX_MS` | `500`   |
    /// | `SYNC_CALL_DELAY_MIN_MS` | `200`   |
    /// | `SYNC_CALL_DELAY_MAX_MS` | `500`   |
    pub fn from_env() -> Result<Self, SyncConfigError> {
        Ok(Self {
            game_delay: DelayWindow::new(
                env_ms("SYNC_GAME_DELAY_MIN_MS", DEFAULT_DELAY_MIN_MS)?,
                env_ms("SYNC_GAME_DELAY_MAX_MS", DEFAULT_DELAY_MAX_MS)?,
            ),
            call_delay: DelayWindow::new(
                env_ms("SYNC_CALL_DELAY_MIN_MS", DEFAULT_DELAY_MIN_MS)?,
                env_ms("SYNC_CALL_DELAY_MAX_MS", DEFAULT_DELAY_MAX_MS)?,
            ),
        })
    }
}

fn env_ms(var: &'static str, default: u64) -> Result<u64, SyncConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| SyncConfigError { var, value }),
        Err(_) => Ok(default),
    }
}
