//! Repository for the `profiles` table.

use sqlx::PgPool;

use crate::models::profile::{Profile, UpsertProfile};

/// Column list for `profiles` queries.
const COLUMNS: &str = "\
    steam_id, persona_name, profile_url, avatar_full, loc_country_code, \
    time_created, created_at, updated_at";

/// Provides upsert and lookup for Steam profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a profile or overwrite the existing snapshot for the same
    /// `steam_id`.
    pub async fn upsert(pool: &PgPool, input: &UpsertProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles \
                 (steam_id, persona_name, profile_url, avatar_full, loc_country_code, time_created) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (steam_id) DO UPDATE SET \
                 persona_name = EXCLUDED.persona_name, \
                 profile_url = EXCLUDED.profile_url, \
                 avatar_full = EXCLUDED.avatar_full, \
                 loc_country_code = EXCLUDED.loc_country_code, \
                 time_created = EXCLUDED.time_created, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.steam_id)
            .bind(&input.persona_name)
            .bind(&input.profile_url)
            .bind(&input.avatar_full)
            .bind(input.loc_country_code.as_deref())
            .bind(input.time_created)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by Steam id.
    pub async fn find_by_steam_id(
        pool: &PgPool,
        steam_id: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE steam_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(steam_id)
            .fetch_optional(pool)
            .await
    }
}
