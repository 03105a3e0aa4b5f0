//! Randomized pauses between Steam Web API calls.
//!
//! Steam does not publish its rate limits. Spacing calls by a random amount
//! inside a small window keeps a sync run from bursting and getting blocked.

use std::time::Duration;

use rand::Rng;

/// Inclusive `[min_ms, max_ms]` window a delay is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayWindow {
    /// A window that never sleeps. Used by tests.
    pub const NONE: DelayWindow = DelayWindow::new(0, 0);

    /// Build a window. Reversed bounds are swapped.
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        if min_ms <= max_ms {
            Self { min_ms, max_ms }
        } else {
            Self {
                min_ms: max_ms,
                max_ms: min_ms,
            }
        }
    }

    /// Draw a uniformly random duration from the window.
    pub fn sample(&self) -> Duration {
        if self.min_ms == self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        let ms = rand::rng().random_range(self.min_ms..=self.max_ms);
        Duration::from_millis(ms)
    }

    /// Suspend the caller for a duration drawn from the window.
    pub async fn wait(&self) {
        let pause = self.sample();
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
    }
}

/// Suspend the caller for a uniformly random duration in `[min_ms, max_ms]`.
pub async fn delay(min_ms: u64, max_ms: u64) {
    DelayWindow::new(min_ms, max_ms).wait().await;
}
