//! User repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use promozap_core::{PasswordHash, UserId};

use super::RepositoryError;
use crate::models::User;

/// Username of the account bootstrapped on first startup.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for user queries.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            username: row.username,
            password_hash: PasswordHash::from_stored(row.password_hash),
            created_at: row.created_at,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a user by their login name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, username, password_hash, created_at
            FROM user
            WHERE username = ?1
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    /// Create a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &PasswordHash,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO user (username, password_hash, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, username, password_hash, created_at
            ",
        )
        .bind(username)
        .bind(password_hash.as_str())
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("username already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(User::from(row))
    }

    /// Create the default `admin` account if no user with that name exists.
    ///
    /// Idempotent startup step: returns `true` when the account was created,
    /// `false` when it already existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if lookup or insert fails.
    pub async fn ensure_default_admin(
        &self,
        password_hash: &PasswordHash,
    ) -> Result<bool, RepositoryError> {
        if self.get_by_username(DEFAULT_ADMIN_USERNAME).await?.is_some() {
            return Ok(false);
        }

        self.create(DEFAULT_ADMIN_USERNAME, password_hash).await?;
        Ok(true)
    }
}
