//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `sqlite` - Embedded SQLite storage via SeaORM
//! - `auth` - JWT + Argon2 authentication

#[cfg(feature = "sqlite")]
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

#[cfg(feature = "sqlite")]
pub use database::{DatabaseConfig, SqlitePostRepository, SqliteUserRepository};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
