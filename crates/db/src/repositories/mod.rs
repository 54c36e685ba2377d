//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application.

pub mod client;
pub mod expense;
pub mod inventory;
pub mod provider;
pub mod transaction;
pub mod user;

pub use client::ClientRepository;
pub use expense::ExpenseRepository;
pub use inventory::InventoryRepository;
pub use provider::ProviderRepository;
pub use transaction::{NewTransaction, TransactionRepository};
pub use user::UserRepository;
