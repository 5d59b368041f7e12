//! Session middleware configuration.
//!
//! Sets up `SQLite`-backed sessions using tower-sessions with a signed
//! session cookie (SameSite=Strict, 24hr expiry). The signing key is
//! derived from the configured `SESSION_SECRET`.

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, SessionManagerLayer, cookie::Key};
use tower_sessions_sqlx_store::SqliteStore;

use crate::config::AppConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "promozap_session";

/// Session expiry time in seconds (24 hours).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with a `SQLite` store.
///
/// Runs the store's own table migration, so the session table exists in the
/// same database file as the application tables.
///
/// # Errors
///
/// Returns `sqlx::Error` if the session table cannot be created.
///
/// # Panics
///
/// Panics if the session secret is shorter than the cookie key minimum;
/// config validation rejects such secrets before this is reached.
pub async fn create_session_layer(
    pool: &SqlitePool,
    config: &AppConfig,
) -> Result<SessionManagerLayer<SqliteStore, SignedCookie>, sqlx::Error> {
    let store = SqliteStore::new(pool.clone());
    store.migrate().await?;

    // Determine if we're in production (HTTPS)
    let is_secure = config.base_url.starts_with("https://");

    let key = Key::derive_from(config.session_secret.expose_secret().as_bytes());

    Ok(SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key))
}
