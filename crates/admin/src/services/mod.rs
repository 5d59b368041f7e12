//! Application services for the admin panel.

pub mod auth;
pub mod composer;

pub use auth::{AuthError, AuthService};
