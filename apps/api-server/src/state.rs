//! Application state - shared across all handlers.

use std::sync::Arc;

use sea_orm::DbConn;

use quill_core::ports::PasswordService;
use quill_core::services::{AuthService, PostService};
use quill_infra::{JwtConfig, JwtTokenService, SqlitePostRepository, SqliteUserRepository};

/// Shared application state.
///
/// Built once at startup from an explicit database handle; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub db: DbConn,
    pub auth: Arc<AuthService>,
    pub posts: Arc<PostService>,
}

impl AppState {
    /// Wire the SQLite repositories and auth services around `db`.
    pub fn new(db: DbConn, jwt: JwtConfig, passwords: Arc<dyn PasswordService>) -> Self {
        let users = Arc::new(SqliteUserRepository::new(db.clone()));
        let posts = Arc::new(SqlitePostRepository::new(db.clone()));
        let tokens = Arc::new(JwtTokenService::new(jwt));

        tracing::info!("Application state initialized");

        Self {
            auth: Arc::new(AuthService::new(users, passwords, tokens)),
            posts: Arc::new(PostService::new(posts)),
            db,
        }
    }
}
