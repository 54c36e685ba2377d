//! Admin account seeding.

use std::fmt;

use estratosfera_core::auth::hash_password;
use estratosfera_db::UserRepository;
use estratosfera_db::entities::users;
use estratosfera_shared::config::SeedConfig;
use estratosfera_shared::{AppError, AppResult};
use sea_orm::DatabaseConnection;

use crate::db_err;

/// Result of a seed run.
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    /// The admin row, freshly inserted or pre-existing.
    pub user: users::Model,
    /// Whether this run inserted the row.
    pub created: bool,
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.created {
            write!(f, "Created admin user: {}", self.user.email)
        } else {
            write!(
                f,
                "Admin user {} already exists, left unchanged",
                self.user.email
            )
        }
    }
}

/// Upserts the administrative account keyed on the configured email.
///
/// The password is hashed only for the insert path; an existing row keeps
/// its stored hash and every other field.
///
/// # Errors
///
/// Returns an error if hashing or the upsert fails.
pub async fn seed_admin(db: &DatabaseConnection, cfg: &SeedConfig) -> AppResult<SeedOutcome> {
    let password_hash = hash_password(&cfg.admin_password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let (user, created) = UserRepository::new(db.clone())
        .upsert_admin(&cfg.admin_email, &password_hash, &cfg.admin_name)
        .await
        .map_err(db_err)?;

    Ok(SeedOutcome { user, created })
}
