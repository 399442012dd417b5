use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;

/// Marketplace role carried on every profile row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "profile_role", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ProfileRole {
    Player,
    VenueOwner,
    Admin,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub role: ProfileRole,
    /// Device token for push delivery. Absent means the profile cannot be
    /// pushed to, which dispatch treats as a skip, not an error.
    pub fcm_token: Option<String>,
    pub email: String,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
