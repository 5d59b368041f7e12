//! Username/password authentication service.

use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::{RepositoryError, UserRepository};
use crate::models::User;

/// Errors produced by the authentication service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password. Deliberately a single variant:
    /// callers must not reveal which of the two was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Database access failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Authentication service.
///
/// Validates submitted credentials against the user store. Establishing
/// and tearing down the session itself is the route handler's job (via
/// the helpers in `middleware::auth`).
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Verify a username/password pair.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for a lookup miss and for a
    /// hash mismatch alike; `AuthError::Repository` if the lookup fails.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .get_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(password) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }
}
