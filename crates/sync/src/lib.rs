//! Steam sync services.
//!
//! - [`achievements`]: per-player achievement sync (fetch, reconcile,
//!   persist, with per-game failure isolation).
//! - [`library`]: profile, owned-games and recently-played snapshots.
//!
//! Every service calls Steam strictly sequentially and spaces calls with the
//! delay windows from [`SyncConfig`].

pub mod achievements;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod library;

pub use achievements::{AchievementSync, GameFailure, GameOutcome, SkipReason, SyncReport};
pub use config::SyncConfig;
pub use error::{FailedGame, LibraryError, SyncError};
pub use library::LibrarySync;
