use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Venue;

pub struct VenueRepository;

impl VenueRepository {
    pub async fn get_by_id(pool: &PgPool, venue_id: Uuid) -> Result<Option<Venue>, sqlx::Error> {
        sqlx::query_as::<_, Venue>(
            r#"
            SELECT id, name, owner_id
            FROM venues
            WHERE id = $1
            "#,
        )
        .bind(venue_id)
        .fetch_optional(pool)
        .await
    }
}
