//! User entity and related types

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered user.
///
/// Plain data record as returned by the repository; the id is assigned by
/// the storage layer and immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Storage-assigned identifier
    pub id: i64,
    /// Display name, mutable in principle
    pub name: String,
    /// Globally unique handle chosen at registration
    pub handle: String,
    /// Argon2 PHC string - never exposed in serialization
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields required to persist a new user; the id and timestamp are
/// assigned by storage.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub handle: String,
    pub password_hash: String,
}
