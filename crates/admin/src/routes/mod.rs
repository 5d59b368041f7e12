//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health           - Liveness check
//! GET  /health/ready     - Readiness check (pings the database)
//!
//! # Auth
//! GET  /login            - Login page
//! POST /login            - Process login form
//! GET  /logout           - Logout, redirect to /login
//!
//! # Catalog (session required)
//! GET  /                 - Product listing, newest first
//! POST /                 - Create product from form, redirect to /
//! GET  /deletar/{id}     - Delete product, redirect to / (404 if absent)
//!
//! # Messages (session required)
//! POST /gerar_mensagem   - JSON {ids: [..]} -> {mensagens: [..]}
//! ```
//!
//! The Portuguese paths and form field names are kept byte-compatible with
//! the legacy panel so existing clients and bookmarks keep working.

pub mod auth;
pub mod catalog;
pub mod health;
pub mod messages;

use axum::Router;

use crate::state::AppState;

/// Build the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(catalog::router())
        .merge(messages::router())
}
