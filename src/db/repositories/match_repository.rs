use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Match;

pub struct MatchRepository;

impl MatchRepository {
    pub async fn get_by_id(pool: &PgPool, match_id: Uuid) -> Result<Option<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            r#"
            SELECT id, creator_id, venue_id
            FROM matches
            WHERE id = $1
            "#,
        )
        .bind(match_id)
        .fetch_optional(pool)
        .await
    }
}
