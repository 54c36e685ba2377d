//! Scoped one-shot task runner.
//!
//! Brackets a unit of work between connector acquisition and release.
//! Release happens on every path: operation success, operation error, and
//! a close failure on the error path never masks the operation's error.

use std::future::Future;

use estratosfera_shared::{AppError, AppResult};
use sea_orm::DatabaseConnection;
use tracing::{debug, error};

/// Runs a one-shot operation inside an acquire/release bracket.
///
/// Connects to the store, hands the operation a connection handle, and
/// closes the pool once the operation finishes, however it finishes. A
/// connect failure is returned without running the operation at all.
///
/// # Errors
///
/// Returns the operation's error, or `AppError::Database` when acquiring
/// or (on an otherwise successful run) releasing the connector fails.
pub async fn run<F, Fut, T>(database_url: &str, op: F) -> AppResult<T>
where
    F: FnOnce(DatabaseConnection) -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let db = estratosfera_db::connect(database_url)
        .await
        .map_err(|e| AppError::Database(format!("failed to acquire connector: {e}")))?;
    debug!("connector acquired");

    let result = op(db.clone()).await;

    match (result, db.close().await) {
        (Ok(value), Ok(())) => {
            debug!("connector released");
            Ok(value)
        }
        (Ok(_), Err(e)) => Err(AppError::Database(format!(
            "failed to release connector: {e}"
        ))),
        (Err(e), Ok(())) => {
            debug!("connector released");
            Err(e)
        }
        (Err(e), Err(close_err)) => {
            // The operation's error is the one worth reporting
            error!(error = %close_err, "failed to release connector");
            Err(e)
        }
    }
}
