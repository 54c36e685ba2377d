//! Shared test setup: an in-memory SQLite database with the real
//! migrations applied.

use estratosfera_db::migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Connects to a fresh in-memory SQLite database and applies migrations.
///
/// A single pooled connection keeps the in-memory database alive for the
/// whole test.
pub async fn setup() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}
