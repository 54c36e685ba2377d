//! One-shot operations against the Estratosfera store.
//!
//! Every maintenance script is the same three-step sequence: acquire a
//! connector, run a bounded unit of work, release the connector. The
//! [`task`] module provides the scoped runner that guarantees the release
//! on every exit path; the remaining modules hold the units of work:
//!
//! - `inspect` - read-only counts, listings, and dumps
//! - `repair` - best-effort correction of invariant violations
//! - `seed` - admin account upsert
//! - `maintenance` - targeted deletes and probe inserts

pub mod inspect;
pub mod maintenance;
pub mod repair;
pub mod seed;
pub mod task;

use estratosfera_shared::AppError;
use sea_orm::DbErr;

pub(crate) fn db_err(e: DbErr) -> AppError {
    AppError::Database(e.to_string())
}
