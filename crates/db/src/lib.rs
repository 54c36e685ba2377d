//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the Estratosfera store
//! - Repository abstractions for data access
//! - Portable migrations (the same DDL runs on SQLite and Postgres)

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    ClientRepository, ExpenseRepository, InventoryRepository, ProviderRepository,
    TransactionRepository, UserRepository,
};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
