//! Domain models for the admin panel.

pub mod product;
pub mod session;
pub mod user;

pub use product::{NewProduct, Product};
pub use session::{CurrentUser, session_keys};
pub use user::User;
