//! String-backed active enums shared by the entities.
//!
//! Stored as plain strings so the same schema works on SQLite and Postgres.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User role.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserRole {
    /// Full administrative access.
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    /// Day-to-day sales access.
    #[sea_orm(string_value = "STAFF")]
    Staff,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "ADMIN"),
            Self::Staff => write!(f, "STAFF"),
        }
    }
}
