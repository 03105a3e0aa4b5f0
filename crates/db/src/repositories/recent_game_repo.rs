//! Repository for the `recent_games` table.

use sqlx::PgPool;

use crate::models::recent_game::{RecentGame, UpsertRecentGame};

/// Column list for `recent_games` queries.
const COLUMNS: &str = "\
    steam_id, app_id, name, playtime_2weeks, playtime_forever, header_image, \
    created_at, updated_at";

/// Provides bulk upsert and listing for recently-played games.
pub struct RecentGameRepo;

impl RecentGameRepo {
    /// Upsert every recently-played game for `steam_id` within a transaction.
    pub async fn bulk_upsert(
        pool: &PgPool,
        steam_id: &str,
        games: &[UpsertRecentGame],
    ) -> Result<Vec<RecentGame>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut results = Vec::with_capacity(games.len());

        let query = format!(
            "INSERT INTO recent_games \
                 (steam_id, app_id, name, playtime_2weeks, playtime_forever, header_image) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (steam_id, app_id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 playtime_2weeks = EXCLUDED.playtime_2weeks, \
                 playtime_forever = EXCLUDED.playtime_forever, \
                 header_image = EXCLUDED.header_image, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );

        for game in games {
            let row = sqlx::query_as::<_, RecentGame>(&query)
                .bind(steam_id)
                .bind(game.app_id)
                .bind(&game.name)
                .bind(game.playtime_2weeks)
                .bind(game.playtime_forever)
                .bind(&game.header_image)
                .fetch_one(&mut *tx)
                .await?;
            results.push(row);
        }

        tx.commit().await?;
        Ok(results)
    }

    /// List a player's recently-played games, most played first.
    pub async fn list_by_steam_id(
        pool: &PgPool,
        steam_id: &str,
    ) -> Result<Vec<RecentGame>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM recent_games \
             WHERE steam_id = $1 \
             ORDER BY playtime_2weeks DESC, app_id"
        );
        sqlx::query_as::<_, RecentGame>(&query)
            .bind(steam_id)
            .fetch_all(pool)
            .await
    }
}
