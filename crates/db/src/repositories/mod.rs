//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod achievement_repo;
pub mod owned_game_repo;
pub mod profile_repo;
pub mod recent_game_repo;

pub use achievement_repo::AchievementRepo;
pub use owned_game_repo::OwnedGameRepo;
pub use profile_repo::ProfileRepo;
pub use recent_game_repo::RecentGameRepo;
