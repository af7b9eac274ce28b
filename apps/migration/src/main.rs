//! Migration CLI tool.
//!
//! Reads `DATABASE_URL` (e.g. `sqlite://blog.db?mode=rwc`) and runs the
//! standard SeaORM migration commands against it.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter("info,sea_orm_migration=info")
        .init();

    cli::run_cli(migration::Migrator).await;
}
