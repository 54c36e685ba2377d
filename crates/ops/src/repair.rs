//! Repair operations: find rows violating an invariant and correct them
//! in place.
//!
//! Repairs are deliberately not transactional. Each row is updated on its
//! own, and the report carries a per-row failure list instead of rolling
//! back; rows fixed before a failure stay fixed.

use std::fmt;

use estratosfera_core::cleaner::{clean_name, should_update};
use estratosfera_db::{ClientRepository, ExpenseRepository, TransactionRepository};
use estratosfera_shared::AppResult;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::db_err;

/// A row the repair could not update.
#[derive(Debug, Clone)]
pub struct RowFailure {
    /// Row id, as text.
    pub id: String,
    /// The error that stopped the update.
    pub error: String,
}

/// Outcome of a best-effort repair pass.
#[derive(Debug, Clone)]
pub struct RepairReport {
    /// Rows the pass looked at.
    pub examined: usize,
    /// Rows successfully corrected.
    pub fixed: usize,
    /// Rows that could not be corrected.
    pub failures: Vec<RowFailure>,
}

impl RepairReport {
    fn new(examined: usize) -> Self {
        Self {
            examined,
            fixed: 0,
            failures: Vec::new(),
        }
    }
}

impl fmt::Display for RepairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Examined {} rows, fixed {}.",
            self.examined, self.fixed
        )?;
        for failure in &self.failures {
            write!(f, "\n  failed on id {}: {}", failure.id, failure.error)?;
        }
        Ok(())
    }
}

/// Flips negative expense amounts to their absolute value.
///
/// Idempotent: once every amount is non-negative, a second pass examines
/// zero rows.
///
/// # Errors
///
/// Returns an error if the selection query fails; individual update
/// failures are reported per row instead.
pub async fn fix_negative_expenses(db: &DatabaseConnection) -> AppResult<RepairReport> {
    let repo = ExpenseRepository::new(db.clone());
    let negatives = repo.find_negative().await.map_err(db_err)?;

    let mut report = RepairReport::new(negatives.len());
    for expense in negatives {
        match repo.set_monto(expense.id, expense.monto.abs()).await {
            Ok(()) => report.fixed += 1,
            Err(e) => {
                warn!(id = expense.id, error = %e, "expense repair failed");
                report.failures.push(RowFailure {
                    id: expense.id.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }
    Ok(report)
}

/// Flips negative transaction amounts to their absolute value.
///
/// Transactions share the non-negative amount invariant with expenses;
/// this is the same pass over the other table.
///
/// # Errors
///
/// Returns an error if the selection query fails; individual update
/// failures are reported per row instead.
pub async fn fix_negative_transactions(db: &DatabaseConnection) -> AppResult<RepairReport> {
    let repo = TransactionRepository::new(db.clone());
    let negatives = repo.find_negative().await.map_err(db_err)?;

    let mut report = RepairReport::new(negatives.len());
    for tx in negatives {
        match repo.set_monto(tx.id, tx.monto.abs()).await {
            Ok(()) => report.fixed += 1,
            Err(e) => {
                warn!(id = tx.id, error = %e, "transaction repair failed");
                report.failures.push(RowFailure {
                    id: tx.id.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }
    Ok(report)
}

/// Normalizes every client display name through the cleaner.
///
/// Only rows whose cleaned name differs from the stored one (and is long
/// enough to plausibly be a name) are written.
///
/// # Errors
///
/// Returns an error if the selection query fails; individual update
/// failures are reported per row instead.
pub async fn clean_client_names(db: &DatabaseConnection) -> AppResult<RepairReport> {
    let repo = ClientRepository::new(db.clone());
    let clients = repo.find_all().await.map_err(db_err)?;

    let mut report = RepairReport::new(clients.len());
    for client in clients {
        let cleaned = clean_name(&client.nombre);
        if !should_update(&client.nombre, &cleaned) {
            continue;
        }
        match repo.update_name(&client.id, &cleaned).await {
            Ok(()) => report.fixed += 1,
            Err(e) => {
                warn!(id = %client.id, error = %e, "name repair failed");
                report.failures.push(RowFailure {
                    id: client.id,
                    error: e.to_string(),
                });
            }
        }
    }
    Ok(report)
}
