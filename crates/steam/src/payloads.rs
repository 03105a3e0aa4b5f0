//! Raw Steam Web API response shapes and their conversion into domain types.
//!
//! Steam is loose with types: flags arrive as `0`/`1`, percentages as
//! numbers or strings, and whole objects go missing for private profiles.
//! Everything optional here is optional in practice.

use serde::{Deserialize, Deserializer};
use tracker_core::achievements::{
    AchievementDefinition, AchievementProgress, GlobalStat, PlayerProgress,
};

// ---------------------------------------------------------------------------
// Lenient field decoders
// ---------------------------------------------------------------------------

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept `true`/`false`, `0`/`1`, or `"0"`/`"1"`. `null` is `false`.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Str(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        None => false,
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(n)) => n != 0,
        Some(Flag::Str(s)) => s.trim() != "0" && !s.trim().is_empty(),
    })
}

/// Accept a JSON number or a numeric string. `null` and unparseable strings
/// become `0`.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Num {
        Float(f64),
        Str(String),
    }

    Ok(match Option::<Num>::deserialize(deserializer)? {
        None => 0.0,
        Some(Num::Float(f)) => f,
        Some(Num::Str(s)) => s.trim().parse().unwrap_or(0.0),
    })
}

// ---------------------------------------------------------------------------
// GetSchemaForGame
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct SchemaResponse {
    #[serde(default)]
    pub game: Option<SchemaGame>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SchemaGame {
    #[serde(rename = "gameName")]
    pub game_name: Option<String>,
    #[serde(rename = "availableGameStats")]
    pub available_game_stats: Option<AvailableGameStats>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AvailableGameStats {
    #[serde(default)]
    pub achievements: Vec<SchemaAchievement>,
}

#[derive(Debug, Deserialize)]
pub struct SchemaAchievement {
    pub name: String,
    #[serde(rename = "displayName", default, deserialize_with = "null_as_default")]
    pub display_name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icongray: String,
    #[serde(default, deserialize_with = "flag")]
    pub hidden: bool,
}

impl SchemaResponse {
    /// Split into the schema's game name and its achievement definitions.
    pub fn into_definitions(self) -> (Option<String>, Vec<AchievementDefinition>) {
        let Some(game) = self.game else {
            return (None, Vec::new());
        };

        let definitions = game
            .available_game_stats
            .map(|stats| stats.achievements)
            .unwrap_or_default()
            .into_iter()
            .map(|a| AchievementDefinition {
                key: a.name,
                display_name: a.display_name,
                description: a.description.filter(|d| !d.is_empty()),
                icon_url: a.icon,
                icon_gray_url: a.icongray,
                hidden: a.hidden,
            })
            .collect();

        (game.game_name.filter(|n| !n.is_empty()), definitions)
    }
}

// ---------------------------------------------------------------------------
// GetPlayerAchievements
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct PlayerAchievementsResponse {
    #[serde(default)]
    pub playerstats: Option<PlayerStats>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerStats {
    #[serde(rename = "gameName")]
    pub game_name: Option<String>,
    pub achievements: Option<Vec<PlayerAchievement>>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerAchievement {
    pub apiname: String,
    #[serde(default, deserialize_with = "flag")]
    pub achieved: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unlocktime: i64,
}

impl PlayerAchievementsResponse {
    /// `None` when the `playerstats` object is missing entirely; an empty
    /// progress list when it is present without achievements.
    pub fn into_progress(self) -> Option<PlayerProgress> {
        let stats = self.playerstats?;
        Some(PlayerProgress {
            game_name: stats.game_name.filter(|n| !n.is_empty()),
            achievements: stats
                .achievements
                .unwrap_or_default()
                .into_iter()
                .map(|a| AchievementProgress {
                    key: a.apiname,
                    achieved: a.achieved,
                    unlock_timestamp: a.unlocktime,
                })
                .collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// GetGlobalAchievementPercentagesForApp
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct GlobalPercentagesResponse {
    #[serde(default)]
    pub achievementpercentages: Option<GlobalPercentages>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GlobalPercentages {
    #[serde(default)]
    pub achievements: Vec<GlobalPercentage>,
}

#[derive(Debug, Deserialize)]
pub struct GlobalPercentage {
    pub name: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub percent: f64,
}

impl GlobalPercentagesResponse {
    pub fn into_stats(self) -> Vec<GlobalStat> {
        self.achievementpercentages
            .map(|p| p.achievements)
            .unwrap_or_default()
            .into_iter()
            .map(|g| GlobalStat {
                key: g.name,
                percent: g.percent,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// GetPlayerSummaries
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct PlayerSummariesResponse {
    #[serde(default)]
    pub response: PlayerSummariesBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerSummariesBody {
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSummary {
    pub steamid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub personaname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profileurl: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatarfull: String,
    pub loccountrycode: Option<String>,
    pub timecreated: Option<i64>,
}

// ---------------------------------------------------------------------------
// GetOwnedGames / GetRecentlyPlayedGames
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct GamesResponse {
    #[serde(default)]
    pub response: GamesBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct GamesBody {
    #[serde(default)]
    pub games: Vec<GameEntry>,
}

/// One game from the owned or recently-played list.
#[derive(Debug, Clone, Deserialize)]
pub struct GameEntry {
    pub appid: Option<i64>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub playtime_forever: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub playtime_2weeks: i32,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn schema_without_stats_has_no_definitions() {
        let schema: SchemaResponse = serde_json::from_value(json!({ "game": {} })).unwrap();
        let (name, defs) = schema.into_definitions();
        assert!(name.is_none());
        assert!(defs.is_empty());

        let empty: SchemaResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.into_definitions().1.is_empty());
    }

    #[test]
    fn schema_maps_fields_and_int_flags() {
        let schema: SchemaResponse = serde_json::from_value(json!({
            "game": {
                "gameName": "Portal",
                "availableGameStats": {
                    "achievements": [
                        { "name": "A1", "displayName": "First", "hidden": 1,
                          "description": "", "icon": "i.jpg", "icongray": "g.jpg" },
                        { "name": "A2", "displayName": "Second", "hidden": 0,
                          "icon": "i2.jpg", "icongray": "g2.jpg" }
                    ]
                }
            }
        }))
        .unwrap();

        let (name, defs) = schema.into_definitions();
        assert_eq!(name.as_deref(), Some("Portal"));
        assert_eq!(defs.len(), 2);
        assert!(defs[0].hidden);
        assert!(defs[0].description.is_none());
        assert_eq!(defs[1].icon_gray_url, "g2.jpg");
        assert!(!defs[1].hidden);
    }

    #[test]
    fn absent_playerstats_is_none_but_empty_is_some() {
        let absent: PlayerAchievementsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(absent.into_progress().is_none());

        let empty: PlayerAchievementsResponse =
            serde_json::from_value(json!({ "playerstats": { "gameName": "X" } })).unwrap();
        let progress = empty.into_progress().unwrap();
        assert!(progress.achievements.is_empty());
        assert_eq!(progress.game_name.as_deref(), Some("X"));
    }

    #[test]
    fn player_progress_decodes_achieved_flag() {
        let response: PlayerAchievementsResponse = serde_json::from_value(json!({
            "playerstats": {
                "gameName": "Test Game",
                "achievements": [
                    { "apiname": "A1", "achieved": 1, "unlocktime": 1622548800 },
                    { "apiname": "A2", "achieved": 0, "unlocktime": 0 }
                ]
            }
        }))
        .unwrap();

        let progress = response.into_progress().unwrap();
        assert!(progress.achievements[0].achieved);
        assert_eq!(progress.achievements[0].unlock_timestamp, 1622548800);
        assert!(!progress.achievements[1].achieved);
    }

    #[test]
    fn global_percent_accepts_strings_and_numbers() {
        let response: GlobalPercentagesResponse = serde_json::from_value(json!({
            "achievementpercentages": {
                "achievements": [
                    { "name": "A1", "percent": 45.5 },
                    { "name": "A2", "percent": "12.25" }
                ]
            }
        }))
        .unwrap();

        let stats = response.into_stats();
        assert_eq!(stats[0].percent, 45.5);
        assert_eq!(stats[1].percent, 12.25);
    }

    #[test]
    fn null_progress_fields_fall_back_to_defaults() {
        let response: PlayerAchievementsResponse = serde_json::from_value(json!({
            "playerstats": {
                "achievements": [
                    { "apiname": "A1", "achieved": 0, "unlocktime": null },
                    { "apiname": "A2", "achieved": null, "unlocktime": 0 }
                ]
            }
        }))
        .unwrap();

        let progress = response.into_progress().unwrap();
        assert_eq!(progress.achievements.len(), 2);
        assert_eq!(progress.achievements[0].unlock_timestamp, 0);
        assert!(!progress.achievements[1].achieved);
    }

    #[test]
    fn null_schema_fields_fall_back_to_defaults() {
        let schema: SchemaResponse = serde_json::from_value(json!({
            "game": {
                "availableGameStats": {
                    "achievements": [
                        { "name": "A1", "displayName": null, "hidden": null,
                          "icon": null, "icongray": null }
                    ]
                }
            }
        }))
        .unwrap();

        let (_, defs) = schema.into_definitions();
        assert_eq!(defs[0].display_name, "");
        assert_eq!(defs[0].icon_url, "");
        assert_eq!(defs[0].icon_gray_url, "");
        assert!(!defs[0].hidden);
    }

    #[test]
    fn null_percent_is_zero() {
        let response: GlobalPercentagesResponse = serde_json::from_value(json!({
            "achievementpercentages": { "achievements": [ { "name": "A1", "percent": null } ] }
        }))
        .unwrap();

        assert_eq!(response.into_stats()[0].percent, 0.0);
    }

    #[test]
    fn null_playtimes_are_zero() {
        let response: GamesResponse = serde_json::from_value(json!({
            "response": { "games": [
                { "appid": 10, "name": "Half-Life", "playtime_forever": null, "playtime_2weeks": null }
            ] }
        }))
        .unwrap();

        assert_eq!(response.response.games[0].playtime_forever, 0);
        assert_eq!(response.response.games[0].playtime_2weeks, 0);
    }

    #[test]
    fn private_library_decodes_to_no_games() {
        let response: GamesResponse = serde_json::from_value(json!({ "response": {} })).unwrap();
        assert!(response.response.games.is_empty());
    }
}
