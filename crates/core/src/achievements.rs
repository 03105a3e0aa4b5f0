//! Achievement domain types and the three-way reconciliation join.
//!
//! A game's achievements come from three independent Steam sources:
//!
//! - the game schema (display metadata, one entry per achievement),
//! - the player's progress (achieved flag and unlock time),
//! - the global unlock percentages.
//!
//! [`reconcile`] joins them on the achievement key (`apiname`) into one
//! [`ReconciledAchievement`] per schema entry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{AppId, SteamId};

// ---------------------------------------------------------------------------
// Source payloads
// ---------------------------------------------------------------------------

/// One entry from a game's achievement schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    pub key: String,
    pub display_name: String,
    pub description: Option<String>,
    pub icon_url: String,
    pub icon_gray_url: String,
    pub hidden: bool,
}

/// A player's progress on one achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub key: String,
    pub achieved: bool,
    /// Unix seconds; `0` when never unlocked.
    pub unlock_timestamp: i64,
}

/// The player-progress payload for one game.
///
/// An empty `achievements` list is a valid "no progress yet" answer; an
/// absent payload is modelled as `None` on [`AchievementData::progress`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProgress {
    pub game_name: Option<String>,
    pub achievements: Vec<AchievementProgress>,
}

/// Global unlock percentage for one achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalStat {
    pub key: String,
    pub percent: f64,
}

/// Everything fetched from Steam for one `(player, game)` pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchievementData {
    /// Game name reported by the schema endpoint, used when the progress
    /// payload does not carry one.
    pub schema_game_name: Option<String>,
    pub definitions: Vec<AchievementDefinition>,
    pub progress: Option<PlayerProgress>,
    pub global_stats: Vec<GlobalStat>,
}

impl AchievementData {
    /// The result for a game whose schema lists no achievements.
    pub fn empty() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Reconciled record
// ---------------------------------------------------------------------------

/// The persisted achievement row, identified by `(steam_id, app_id, key)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledAchievement {
    pub steam_id: String,
    pub app_id: AppId,
    pub key: String,
    pub game_name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub icon_url: String,
    pub icon_gray_url: String,
    pub hidden: bool,
    pub achieved: bool,
    pub unlock_timestamp: i64,
    pub percent_unlocked_globally: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReconcileError {
    #[error("player progress payload missing for app {app_id}")]
    MissingProgress { app_id: AppId },
}

// ---------------------------------------------------------------------------
// Join
// ---------------------------------------------------------------------------

/// Join schema, player progress and global stats into one record per
/// definition, in definition order.
///
/// Definitions without a progress entry come out locked with a zero unlock
/// time; definitions without a global stat get `0.0` percent. When a key is
/// duplicated in a source the first occurrence wins.
///
/// A game without definitions reconciles to an empty list whatever the other
/// sources hold. A game with definitions but no progress payload at all is
/// an error.
pub fn reconcile(
    steam_id: &SteamId,
    app_id: AppId,
    data: &AchievementData,
) -> Result<Vec<ReconciledAchievement>, ReconcileError> {
    if data.definitions.is_empty() {
        return Ok(Vec::new());
    }

    let progress = data
        .progress
        .as_ref()
        .ok_or(ReconcileError::MissingProgress { app_id })?;

    let mut progress_by_key: HashMap<&str, &AchievementProgress> =
        HashMap::with_capacity(progress.achievements.len());
    for entry in &progress.achievements {
        progress_by_key.entry(entry.key.as_str()).or_insert(entry);
    }

    let mut percent_by_key: HashMap<&str, f64> = HashMap::with_capacity(data.global_stats.len());
    for stat in &data.global_stats {
        percent_by_key.entry(stat.key.as_str()).or_insert(stat.percent);
    }

    let game_name = progress
        .game_name
        .clone()
        .or_else(|| data.schema_game_name.clone())
        .unwrap_or_default();

    let records = data
        .definitions
        .iter()
        .map(|def| {
            let (achieved, unlock_timestamp) = progress_by_key
                .get(def.key.as_str())
                .map(|p| (p.achieved, p.unlock_timestamp))
                .unwrap_or((false, 0));

            ReconciledAchievement {
                steam_id: steam_id.to_string(),
                app_id,
                key: def.key.clone(),
                game_name: game_name.clone(),
                display_name: def.display_name.clone(),
                description: def.description.clone(),
                icon_url: def.icon_url.clone(),
                icon_gray_url: def.icon_gray_url.clone(),
                hidden: def.hidden,
                achieved,
                unlock_timestamp,
                percent_unlocked_globally: percent_by_key
                    .get(def.key.as_str())
                    .copied()
                    .unwrap_or(0.0),
            }
        })
        .collect();

    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn player() -> SteamId {
        SteamId::parse("76561197960287930").unwrap()
    }

    fn def(key: &str) -> AchievementDefinition {
        AchievementDefinition {
            key: key.to_string(),
            display_name: format!("{key} title"),
            description: Some(format!("{key} description")),
            icon_url: format!("https://cdn.example/{key}.jpg"),
            icon_gray_url: format!("https://cdn.example/{key}_gray.jpg"),
            hidden: false,
        }
    }

    fn unlocked(key: &str, at: i64) -> AchievementProgress {
        AchievementProgress {
            key: key.to_string(),
            achieved: true,
            unlock_timestamp: at,
        }
    }

    fn stat(key: &str, percent: f64) -> GlobalStat {
        GlobalStat {
            key: key.to_string(),
            percent,
        }
    }

    fn data(
        definitions: Vec<AchievementDefinition>,
        progress: Vec<AchievementProgress>,
        global_stats: Vec<GlobalStat>,
    ) -> AchievementData {
        AchievementData {
            schema_game_name: None,
            definitions,
            progress: Some(PlayerProgress {
                game_name: Some("Test Game".into()),
                achievements: progress,
            }),
            global_stats,
        }
    }

    #[test]
    fn one_record_per_definition_in_order() {
        let input = data(
            vec![def("c"), def("a"), def("b")],
            vec![unlocked("b", 10), unlocked("c", 20)],
            vec![stat("a", 1.5), stat("c", 50.0)],
        );

        let records = reconcile(&player(), 440, &input).unwrap();

        let keys: Vec<_> = records.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["c", "a", "b"]);
        assert!(records.iter().all(|r| r.app_id == 440));
        assert!(records.iter().all(|r| r.steam_id == "76561197960287930"));
        assert!(records.iter().all(|r| r.game_name == "Test Game"));
    }

    #[test]
    fn merges_metadata_progress_and_percent() {
        let input = data(vec![def("win")], vec![unlocked("win", 1622548800)], vec![stat("win", 12.5)]);

        let records = reconcile(&player(), 10, &input).unwrap();

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.display_name, "win title");
        assert_eq!(r.description.as_deref(), Some("win description"));
        assert_eq!(r.icon_gray_url, "https://cdn.example/win_gray.jpg");
        assert!(r.achieved);
        assert_eq!(r.unlock_timestamp, 1622548800);
        assert_eq!(r.percent_unlocked_globally, 12.5);
    }

    #[test]
    fn missing_progress_entry_defaults_to_locked() {
        let input = data(vec![def("a"), def("b")], vec![unlocked("a", 5)], vec![]);

        let records = reconcile(&player(), 10, &input).unwrap();

        assert!(!records[1].achieved);
        assert_eq!(records[1].unlock_timestamp, 0);
    }

    #[test]
    fn missing_global_stat_defaults_to_zero() {
        let input = data(vec![def("a"), def("b")], vec![], vec![stat("b", 3.0)]);

        let records = reconcile(&player(), 10, &input).unwrap();

        assert_eq!(records[0].percent_unlocked_globally, 0.0);
        assert_eq!(records[1].percent_unlocked_globally, 3.0);
    }

    #[test]
    fn no_definitions_is_empty_even_without_progress() {
        let input = AchievementData {
            progress: None,
            global_stats: vec![stat("orphan", 9.0)],
            ..AchievementData::empty()
        };

        assert!(reconcile(&player(), 10, &input).unwrap().is_empty());
    }

    #[test]
    fn absent_progress_payload_is_an_error() {
        let input = AchievementData {
            definitions: vec![def("a")],
            progress: None,
            ..AchievementData::empty()
        };

        assert_matches!(
            reconcile(&player(), 77, &input),
            Err(ReconcileError::MissingProgress { app_id: 77 })
        );
    }

    #[test]
    fn empty_progress_payload_is_not_an_error() {
        let input = data(vec![def("a")], vec![], vec![]);

        let records = reconcile(&player(), 10, &input).unwrap();

        assert_eq!(records.len(), 1);
        assert!(!records[0].achieved);
    }

    #[test]
    fn first_duplicate_key_wins() {
        let input = data(
            vec![def("a")],
            vec![unlocked("a", 1), unlocked("a", 2)],
            vec![stat("a", 4.0), stat("a", 8.0)],
        );

        let records = reconcile(&player(), 10, &input).unwrap();

        assert_eq!(records[0].unlock_timestamp, 1);
        assert_eq!(records[0].percent_unlocked_globally, 4.0);
    }

    #[test]
    fn falls_back_to_schema_game_name() {
        let mut input = data(vec![def("a")], vec![], vec![]);
        input.schema_game_name = Some("Schema Name".into());
        if let Some(progress) = input.progress.as_mut() {
            progress.game_name = None;
        }

        let records = reconcile(&player(), 10, &input).unwrap();

        assert_eq!(records[0].game_name, "Schema Name");
    }
}
