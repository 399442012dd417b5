use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::{Profile, ProfileRole};

pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn get_by_id(pool: &PgPool, profile_id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
        sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, first_name, last_name, role, fcm_token, email
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(profile_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn get_by_role(pool: &PgPool, role: ProfileRole) -> Result<Vec<Profile>, sqlx::Error> {
        sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, first_name, last_name, role, fcm_token, email
            FROM profiles
            WHERE role = $1
            "#,
        )
        .bind(role)
        .fetch_all(pool)
        .await
    }

    /// Last-write-wins overwrite of the profile's device token.
    pub async fn set_fcm_token(
        pool: &PgPool,
        profile_id: Uuid,
        token: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET fcm_token = $1
            WHERE id = $2
            "#,
        )
        .bind(token)
        .bind(profile_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
