//! Promozap Core - Shared types library.
//!
//! This crate provides common types used by the Promozap admin panel:
//! type-safe entity IDs and the password hash value object used for
//! credential storage.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and password hashes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
