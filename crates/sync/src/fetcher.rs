//! Gathers the three Steam payloads a game's achievements are built from.

use tracker_core::achievements::AchievementData;
use tracker_core::rate_limit::DelayWindow;
use tracker_core::types::{AppId, SteamId};
use tracker_steam::{SteamApi, SteamApiError};

/// Fetch schema, player progress and global percentages for one game.
///
/// The schema is fetched first; when it lists no achievements the game is
/// done and no further calls are made. The two remaining calls are each
/// preceded by a pause drawn from `call_delay`. Nothing is retried: the
/// first failing call's error is returned.
pub async fn fetch_achievement_data(
    api: &SteamApi,
    steam_id: &SteamId,
    app_id: AppId,
    call_delay: DelayWindow,
) -> Result<AchievementData, SteamApiError> {
    let (schema_game_name, definitions) = api.schema_for_game(app_id).await?.into_definitions();
    if definitions.is_empty() {
        tracing::debug!(app_id, "Game has no achievements");
        return Ok(AchievementData::empty());
    }

    call_delay.wait().await;
    let progress = api
        .player_achievements(steam_id, app_id)
        .await?
        .into_progress();

    call_delay.wait().await;
    let global_stats = api
        .global_achievement_percentages(app_id)
        .await?
        .into_stats();

    tracing::debug!(
        app_id,
        definitions = definitions.len(),
        has_progress = progress.is_some(),
        global_stats = global_stats.len(),
        "Fetched achievement data",
    );

    Ok(AchievementData {
        schema_game_name,
        definitions,
        progress,
        global_stats,
    })
}
