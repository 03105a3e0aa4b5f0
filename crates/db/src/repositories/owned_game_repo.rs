//! Repository for the `owned_games` table.

use sqlx::PgPool;

use crate::models::owned_game::{OwnedGame, UpsertOwnedGame};

/// Column list for `owned_games` queries.
const COLUMNS: &str = "\
    steam_id, app_id, game_name, playtime_forever, header_image, \
    created_at, updated_at";

/// Provides bulk upsert and listing for a player's owned library.
pub struct OwnedGameRepo;

impl OwnedGameRepo {
    /// Upsert every game for `steam_id` within a transaction.
    ///
    /// Existing rows keep their `created_at`; name, playtime and header
    /// image are overwritten.
    pub async fn bulk_upsert(
        pool: &PgPool,
        steam_id: &str,
        games: &[UpsertOwnedGame],
    ) -> Result<Vec<OwnedGame>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut results = Vec::with_capacity(games.len());

        let query = format!(
            "INSERT INTO owned_games (steam_id, app_id, game_name, playtime_forever, header_image) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (steam_id, app_id) DO UPDATE SET \
                 game_name = EXCLUDED.game_name, \
                 playtime_forever = EXCLUDED.playtime_forever, \
                 header_image = EXCLUDED.header_image, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );

        for game in games {
            let row = sqlx::query_as::<_, OwnedGame>(&query)
                .bind(steam_id)
                .bind(game.app_id)
                .bind(&game.game_name)
                .bind(game.playtime_forever)
                .bind(&game.header_image)
                .fetch_one(&mut *tx)
                .await?;
            results.push(row);
        }

        tx.commit().await?;
        Ok(results)
    }

    /// List a player's games ordered by name.
    pub async fn list_by_steam_id(
        pool: &PgPool,
        steam_id: &str,
    ) -> Result<Vec<OwnedGame>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM owned_games \
             WHERE steam_id = $1 \
             ORDER BY game_name, app_id"
        );
        sqlx::query_as::<_, OwnedGame>(&query)
            .bind(steam_id)
            .fetch_all(pool)
            .await
    }
}
