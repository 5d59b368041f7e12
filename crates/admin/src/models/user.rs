//! Admin user domain types.

use chrono::{DateTime, Utc};

use promozap_core::{PasswordHash, UserId};

/// An admin user (domain type).
///
/// There is exactly one of these in a fresh deployment: the `admin` account
/// bootstrapped at startup. The application never mutates or deletes users.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Login name, unique across all users.
    pub username: String,
    /// Salted Argon2 hash of the user's password.
    pub password_hash: PasswordHash,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}
