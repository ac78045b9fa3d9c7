use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role stored in the user directory
///
/// A closed enum on purpose: decision sites in the authorization engine
/// match exhaustively over it, so adding a role forces every site to be
/// revisited. Stored as lowercase text in the directory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    /// Regular account; may only see its own record
    User,
    /// Administrator account; bulk access still requires the admin flag
    Admin,
}

/// A record in the user directory
///
/// Owned and mutated only by the directory; the decision core treats it as
/// immutable input.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Unique, non-empty login name (case-sensitive)
    pub username: String,
    /// Role used by the authorization engine
    pub role: Role,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new directory record
    pub fn new(username: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            username,
            role,
            created_at: now,
            updated_at: now,
        }
    }
}
