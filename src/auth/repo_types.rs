use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                   // unique account ID
    pub first_name: String,
    pub last_name: String,
    pub email: String,              // unique, stored lowercased
    #[serde(skip_serializing)]
    pub password_hash: String,      // argon2 hash, not exposed in JSON
    pub created_at: OffsetDateTime, // creation timestamp
}
