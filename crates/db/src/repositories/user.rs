//! User repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{sea_orm_active_enums::UserRole, users};

/// User repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    /// Lists all users, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> Result<Vec<users::Model>, DbErr> {
        users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Upserts the administrative account keyed on email.
    ///
    /// Inserts the user if no row with that email exists; otherwise the
    /// existing row is returned untouched, including its stored password
    /// hash. Returns the row and whether it was created by this call.
    ///
    /// # Errors
    ///
    /// Returns an error if a query or the insert fails.
    pub async fn upsert_admin(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<(users::Model, bool), DbErr> {
        if let Some(existing) = self.find_by_email(email).await? {
            return Ok((existing, false));
        }

        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            name: Set(name.to_string()),
            role: Set(UserRole::Admin),
            created_at: Set(Utc::now()),
        };

        let inserted = user.insert(&self.db).await?;
        Ok((inserted, true))
    }
}
