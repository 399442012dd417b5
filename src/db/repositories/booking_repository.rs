use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Booking;

pub struct BookingRepository;

impl BookingRepository {
    pub async fn get_by_id(pool: &PgPool, booking_id: Uuid) -> Result<Option<Booking>, sqlx::Error> {
        sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, venue_id, date, start_time, end_time
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(pool)
        .await
    }
}
