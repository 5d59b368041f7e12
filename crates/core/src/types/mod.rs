//! Core types for Promozap.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod id;

pub use credential::{PasswordHash, PasswordHashError};
pub use id::*;
