//! HTTP middleware for the admin panel.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with `SQLite` store, signed cookie)
//!
//! Authentication is not a layer: protected handlers take the
//! [`RequireAuth`] extractor explicitly.

pub mod auth;
pub mod session;

pub use auth::{RequireAuth, clear_current_user, set_current_user};
pub use session::create_session_layer;
