//! SQLite persistence through SeaORM.

mod base;
mod connections;
mod post_repo;
mod user_repo;

pub mod entity;

pub use base::SqliteRepository;
pub use connections::{DatabaseConfig, connect};
pub use post_repo::SqlitePostRepository;
pub use user_repo::SqliteUserRepository;

#[cfg(test)]
mod tests;
