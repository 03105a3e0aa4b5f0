//! Repository for the `achievements` table.

use sqlx::PgPool;
use tracker_core::achievements::ReconciledAchievement;
use tracker_core::types::AppId;

use crate::models::achievement::Achievement;

/// Column list for `achievements` queries.
const COLUMNS: &str = "\
    steam_id, app_id, api_name, game_name, display_name, description, \
    icon_url, icon_gray_url, hidden, achieved, unlock_time, percent, \
    created_at, updated_at";

/// Provides batch upsert and listing for reconciled achievements.
pub struct AchievementRepo;

impl AchievementRepo {
    /// Upsert one game's achievements for one player within a transaction.
    ///
    /// Rows are keyed by `(steam_id, app_id, api_name)`; every other column
    /// is overwritten. Returns the number of rows written.
    pub async fn upsert_batch(
        pool: &PgPool,
        steam_id: &str,
        app_id: AppId,
        records: &[ReconciledAchievement],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut written = 0u64;

        for record in records {
            let result = sqlx::query(
                "INSERT INTO achievements \
                     (steam_id, app_id, api_name, game_name, display_name, description, \
                      icon_url, icon_gray_url, hidden, achieved, unlock_time, percent) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
                 ON CONFLICT (steam_id, app_id, api_name) DO UPDATE SET \
                     game_name = EXCLUDED.game_name, \
                     display_name = EXCLUDED.display_name, \
                     description = EXCLUDED.description, \
                     icon_url = EXCLUDED.icon_url, \
                     icon_gray_url = EXCLUDED.icon_gray_url, \
                     hidden = EXCLUDED.hidden, \
                     achieved = EXCLUDED.achieved, \
                     unlock_time = EXCLUDED.unlock_time, \
                     percent = EXCLUDED.percent, \
                     updated_at = NOW()",
            )
            .bind(steam_id)
            .bind(app_id)
            .bind(&record.key)
            .bind(&record.game_name)
            .bind(&record.display_name)
            .bind(record.description.as_deref())
            .bind(&record.icon_url)
            .bind(&record.icon_gray_url)
            .bind(record.hidden)
            .bind(record.achieved)
            .bind(record.unlock_timestamp)
            .bind(record.percent_unlocked_globally)
            .execute(&mut *tx)
            .await?;
            written += result.rows_affected();
        }

        tx.commit().await?;
        Ok(written)
    }

    /// List a player's achievements grouped by game, in key order.
    pub async fn list_by_steam_id(
        pool: &PgPool,
        steam_id: &str,
    ) -> Result<Vec<Achievement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM achievements \
             WHERE steam_id = $1 \
             ORDER BY app_id, api_name"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(steam_id)
            .fetch_all(pool)
            .await
    }

    /// Count a player's stored achievements.
    pub async fn count_by_steam_id(pool: &PgPool, steam_id: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM achievements WHERE steam_id = $1")
            .bind(steam_id)
            .fetch_one(pool)
            .await
    }
}
