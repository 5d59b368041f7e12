//! Password credential types.
//!
//! Type-safe wrapper around Argon2 password hashes. The salt and hash
//! parameters are embedded in the stored PHC string, so verification
//! recomputes the hash with the stored parameters and compares in
//! constant time. Plaintext passwords are never stored.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash as ParsedHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use thiserror::Error;

/// Error produced when hashing a password fails.
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// The underlying hash computation failed.
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// A salted Argon2 password hash (PHC string format).
///
/// Constructed either by hashing a plaintext password ([`generate`]) or
/// from a hash previously stored in the database ([`from_stored`]).
///
/// [`generate`]: PasswordHash::generate
/// [`from_stored`]: PasswordHash::from_stored
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

// Don't expose the hash in debug output.
impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHash")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl PasswordHash {
    /// Hash a plaintext password with a freshly generated salt.
    ///
    /// # Errors
    ///
    /// Returns `PasswordHashError::Hash` if the hash cannot be computed.
    pub fn generate(plaintext: &str) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::Hash(e.to_string()))?;
        Ok(Self(hash.to_string()))
    }

    /// Wrap a hash string loaded from storage.
    #[must_use]
    pub const fn from_stored(hash: String) -> Self {
        Self(hash)
    }

    /// Verify a plaintext password against this hash.
    ///
    /// Returns `false` on mismatch and on malformed stored hashes;
    /// verification never panics or surfaces an error to the caller.
    #[must_use]
    pub fn verify(&self, plaintext: &str) -> bool {
        let Ok(parsed) = ParsedHash::new(&self.0) else {
            return false;
        };
        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }

    /// Get the PHC hash string for storage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PasswordHash> for String {
    fn from(hash: PasswordHash) -> Self {
        hash.0
    }
}
