use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::error::DatabaseError;
use super::models::{Booking, Match, Profile, ProfileRole, Venue};
use super::repositories::{
    BookingRepository, MatchRepository, ProfileRepository, VenueRepository,
};

/// Relational reads and the one write the dispatch flow needs.
///
/// Handlers only see this trait, never the pool, so tests can swap in an
/// in-memory fake.
#[async_trait]
pub trait Store: Send + Sync {
    async fn ping(&self) -> Result<(), DatabaseError>;

    async fn profile_by_id(&self, profile_id: Uuid) -> Result<Option<Profile>, DatabaseError>;

    /// All profiles with the admin role, tokened or not.
    async fn admin_profiles(&self) -> Result<Vec<Profile>, DatabaseError>;

    async fn venue_by_id(&self, venue_id: Uuid) -> Result<Option<Venue>, DatabaseError>;

    async fn booking_by_id(&self, booking_id: Uuid) -> Result<Option<Booking>, DatabaseError>;

    async fn match_by_id(&self, match_id: Uuid) -> Result<Option<Match>, DatabaseError>;

    /// Overwrite the profile's device token, last write wins. Updating a
    /// missing profile is not an error; the write just touches zero rows.
    async fn set_fcm_token(&self, profile_id: Uuid, token: &str) -> Result<(), DatabaseError>;
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn profile_by_id(&self, profile_id: Uuid) -> Result<Option<Profile>, DatabaseError> {
        Ok(ProfileRepository::get_by_id(&self.pool, profile_id).await?)
    }

    async fn admin_profiles(&self) -> Result<Vec<Profile>, DatabaseError> {
        Ok(ProfileRepository::get_by_role(&self.pool, ProfileRole::Admin).await?)
    }

    async fn venue_by_id(&self, venue_id: Uuid) -> Result<Option<Venue>, DatabaseError> {
        Ok(VenueRepository::get_by_id(&self.pool, venue_id).await?)
    }

    async fn booking_by_id(&self, booking_id: Uuid) -> Result<Option<Booking>, DatabaseError> {
        Ok(BookingRepository::get_by_id(&self.pool, booking_id).await?)
    }

    async fn match_by_id(&self, match_id: Uuid) -> Result<Option<Match>, DatabaseError> {
        Ok(MatchRepository::get_by_id(&self.pool, match_id).await?)
    }

    async fn set_fcm_token(&self, profile_id: Uuid, token: &str) -> Result<(), DatabaseError> {
        ProfileRepository::set_fcm_token(&self.pool, profile_id, token).await?;
        Ok(())
    }
}
