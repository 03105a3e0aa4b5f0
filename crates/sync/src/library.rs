//! Profile and library snapshots.

use sqlx::PgPool;
use tracker_core::error::CoreError;
use tracker_core::types::{AppId, SteamId};
use tracker_db::models::owned_game::{OwnedGame, UpsertOwnedGame};
use tracker_db::models::profile::{Profile, UpsertProfile};
use tracker_db::models::recent_game::{RecentGame, UpsertRecentGame};
use tracker_db::repositories::{OwnedGameRepo, ProfileRepo, RecentGameRepo};
use tracker_steam::payloads::{GameEntry, PlayerSummary};
use tracker_steam::SteamApi;

use crate::config::SyncConfig;
use crate::error::LibraryError;

/// Name stored for games Steam returns without one.
pub const UNKNOWN_GAME_NAME: &str = "Unknown Game";

/// Store header image for an app.
pub fn header_image_url(app_id: AppId) -> String {
    format!("https://shared.cloudflare.steamstatic.com/store_item_assets/steam/apps/{app_id}/header.jpg")
}

/// Syncs a player's profile, owned games and recently-played games into
/// PostgreSQL.
#[derive(Clone)]
pub struct LibrarySync {
    api: SteamApi,
    pool: PgPool,
    config: SyncConfig,
}

impl LibrarySync {
    pub fn new(api: SteamApi, pool: PgPool, config: SyncConfig) -> Self {
        Self { api, pool, config }
    }

    /// Fetch the player's summary and upsert it.
    pub async fn sync_profile(&self, player_id: &str) -> Result<Profile, LibraryError> {
        let steam_id = SteamId::parse(player_id)?;

        let summary = self
            .api
            .player_summaries(&steam_id)
            .await?
            .response
            .players
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::NotFound {
                entity: "Steam profile",
                id: steam_id.to_string(),
            })?;

        let profile = ProfileRepo::upsert(&self.pool, &profile_input(&steam_id, summary)).await?;
        tracing::info!(steam_id = %steam_id, persona = %profile.persona_name, "Profile synced");
        Ok(profile)
    }

    pub async fn get_profile(&self, player_id: &str) -> Result<Profile, LibraryError> {
        let steam_id = SteamId::parse(player_id)?;
        ProfileRepo::find_by_steam_id(&self.pool, steam_id.as_str())
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "Profile",
                    id: steam_id.to_string(),
                }
                .into()
            })
    }

    /// Fetch the player's owned games and upsert them.
    ///
    /// Private or empty libraries write nothing and return an empty list.
    pub async fn sync_owned_games(&self, player_id: &str) -> Result<Vec<OwnedGame>, LibraryError> {
        let steam_id = SteamId::parse(player_id)?;

        let entries = self.api.owned_games(&steam_id).await?.response.games;
        let inputs: Vec<UpsertOwnedGame> = entries
            .into_iter()
            .filter_map(|entry| owned_game_input(&steam_id, entry))
            .collect();

        if inputs.is_empty() {
            tracing::info!(steam_id = %steam_id, "No owned games returned");
            return Ok(Vec::new());
        }

        let games = OwnedGameRepo::bulk_upsert(&self.pool, steam_id.as_str(), &inputs).await?;
        tracing::info!(steam_id = %steam_id, count = games.len(), "Owned games synced");
        Ok(games)
    }

    pub async fn list_owned_games(&self, player_id: &str) -> Result<Vec<OwnedGame>, LibraryError> {
        let steam_id = SteamId::parse(player_id)?;
        Ok(OwnedGameRepo::list_by_steam_id(&self.pool, steam_id.as_str()).await?)
    }

    /// Fetch the games played in the last two weeks and upsert them.
    ///
    /// Returns the stored rows for the games in this response.
    pub async fn sync_recent_games(
        &self,
        player_id: &str,
    ) -> Result<Vec<RecentGame>, LibraryError> {
        let steam_id = SteamId::parse(player_id)?;

        let entries = self
            .api
            .recently_played_games(&steam_id)
            .await?
            .response
            .games;
        self.config.call_delay.wait().await;

        let inputs: Vec<UpsertRecentGame> = entries
            .into_iter()
            .filter_map(|entry| recent_game_input(&steam_id, entry))
            .collect();

        if inputs.is_empty() {
            tracing::info!(steam_id = %steam_id, "No recently played games");
            return Ok(Vec::new());
        }

        let games = RecentGameRepo::bulk_upsert(&self.pool, steam_id.as_str(), &inputs).await?;
        tracing::info!(steam_id = %steam_id, count = games.len(), "Recent games synced");
        Ok(games)
    }

    pub async fn list_recent_games(
        &self,
        player_id: &str,
    ) -> Result<Vec<RecentGame>, LibraryError> {
        let steam_id = SteamId::parse(player_id)?;
        Ok(RecentGameRepo::list_by_steam_id(&self.pool, steam_id.as_str()).await?)
    }
}

// ---------------------------------------------------------------------------
// Payload -> DTO
// ---------------------------------------------------------------------------

fn profile_input(steam_id: &SteamId, summary: PlayerSummary) -> UpsertProfile {
    UpsertProfile {
        steam_id: steam_id.to_string(),
        persona_name: summary.personaname,
        profile_url: summary.profileurl,
        avatar_full: summary.avatarfull,
        loc_country_code: summary.loccountrycode.filter(|c| !c.is_empty()),
        time_created: summary.timecreated,
    }
}

fn owned_game_input(steam_id: &SteamId, entry: GameEntry) -> Option<UpsertOwnedGame> {
    let Some(app_id) = entry.appid else {
        tracing::warn!(steam_id = %steam_id, "Owned game without app id, dropping");
        return None;
    };
    Some(UpsertOwnedGame {
        app_id,
        game_name: game_name(entry.name),
        playtime_forever: entry.playtime_forever,
        header_image: header_image_url(app_id),
    })
}

fn recent_game_input(steam_id: &SteamId, entry: GameEntry) -> Option<UpsertRecentGame> {
    let Some(app_id) = entry.appid else {
        tracing::warn!(steam_id = %steam_id, "Recent game without app id, dropping");
        return None;
    };
    Some(UpsertRecentGame {
        app_id,
        name: game_name(entry.name),
        playtime_2weeks: entry.playtime_2weeks,
        playtime_forever: entry.playtime_forever,
        header_image: header_image_url(app_id),
    })
}

fn game_name(name: Option<String>) -> String {
    name.filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_GAME_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> SteamId {
        SteamId::parse("76561197960287930").unwrap()
    }

    fn entry(appid: Option<i64>, name: Option<&str>) -> GameEntry {
        GameEntry {
            appid,
            name: name.map(str::to_string),
            playtime_forever: 120,
            playtime_2weeks: 30,
        }
    }

    #[test]
    fn header_image_points_at_store_assets() {
        assert_eq!(
            header_image_url(620),
            "https://shared.cloudflare.steamstatic.com/store_item_assets/steam/apps/620/header.jpg"
        );
    }

    #[test]
    fn nameless_games_get_placeholder() {
        let input = owned_game_input(&player(), entry(Some(10), None)).unwrap();
        assert_eq!(input.game_name, UNKNOWN_GAME_NAME);

        let input = owned_game_input(&player(), entry(Some(10), Some("  "))).unwrap();
        assert_eq!(input.game_name, UNKNOWN_GAME_NAME);
    }

    #[test]
    fn entries_without_app_id_are_dropped() {
        assert!(owned_game_input(&player(), entry(None, Some("Ghost"))).is_none());
        assert!(recent_game_input(&player(), entry(None, Some("Ghost"))).is_none());
    }

    #[test]
    fn recent_input_keeps_both_playtimes() {
        let input = recent_game_input(&player(), entry(Some(400), Some("Portal"))).unwrap();
        assert_eq!(input.playtime_2weeks, 30);
        assert_eq!(input.playtime_forever, 120);
        assert_eq!(input.header_image, header_image_url(400));
    }
}
