//! Expense repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};

use crate::entities::expenses;

/// Expense repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all expenses.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr> {
        expenses::Entity::find().count(&self.db).await
    }

    /// Fetches all expenses with a negative amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_negative(&self) -> Result<Vec<expenses::Model>, DbErr> {
        expenses::Entity::find()
            .filter(expenses::Column::Monto.lt(0))
            .all(&self.db)
            .await
    }

    /// Sets the amount of a single expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn set_monto(&self, id: i32, monto: i64) -> Result<(), DbErr> {
        let expense = expenses::ActiveModel {
            id: Set(id),
            monto: Set(monto),
            ..Default::default()
        };
        expense.update(&self.db).await?;
        Ok(())
    }

    /// Creates a new expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        categoria: &str,
        monto: i64,
        fecha: DateTime<Utc>,
    ) -> Result<expenses::Model, DbErr> {
        let expense = expenses::ActiveModel {
            id: NotSet,
            categoria: Set(categoria.to_string()),
            monto: Set(monto),
            fecha: Set(fecha),
            created_at: Set(Utc::now()),
        };
        expense.insert(&self.db).await
    }
}
