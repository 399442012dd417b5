use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Match {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub venue_id: Uuid,
}
