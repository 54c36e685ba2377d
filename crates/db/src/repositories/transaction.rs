//! Transaction repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, Set,
};

use crate::entities::transactions;

/// Field values for an explicit transaction insert.
///
/// The id is supplied by the caller rather than generated; maintenance
/// inserts reproduce specific historical rows.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Explicit row id.
    pub id: i32,
    /// Owning client id.
    pub cliente_id: String,
    /// Sales profile the sale is attributed to.
    pub perfil_id: i32,
    /// Signed whole-peso amount.
    pub monto: i64,
    /// Payment-state label.
    pub estado_pago: String,
    /// Validity window start.
    pub fecha_inicio: DateTime<Utc>,
    /// Validity window end.
    pub fecha_vencimiento: DateTime<Utc>,
}

/// Transaction repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all transactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr> {
        transactions::Entity::find().count(&self.db).await
    }

    /// Finds a transaction by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<transactions::Model>, DbErr> {
        transactions::Entity::find_by_id(id).one(&self.db).await
    }

    /// Inserts a transaction with explicit field values.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, new: NewTransaction) -> Result<transactions::Model, DbErr> {
        let tx = transactions::ActiveModel {
            id: Set(new.id),
            cliente_id: Set(new.cliente_id),
            perfil_id: Set(new.perfil_id),
            monto: Set(new.monto),
            estado_pago: Set(new.estado_pago),
            fecha_inicio: Set(new.fecha_inicio),
            fecha_vencimiento: Set(new.fecha_vencimiento),
            created_at: Set(Utc::now()),
        };
        tx.insert(&self.db).await
    }

    /// Deletes a transaction by id.
    ///
    /// Fetches first so the caller can report the row's prior field
    /// values; a missing id returns `None` and deletes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or delete fails.
    pub async fn delete_by_id(&self, id: i32) -> Result<Option<transactions::Model>, DbErr> {
        let Some(tx) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        tx.clone().delete(&self.db).await?;
        Ok(Some(tx))
    }

    /// Fetches all transactions with a negative amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_negative(&self) -> Result<Vec<transactions::Model>, DbErr> {
        transactions::Entity::find()
            .filter(transactions::Column::Monto.lt(0))
            .all(&self.db)
            .await
    }

    /// Sets the amount of a single transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn set_monto(&self, id: i32, monto: i64) -> Result<(), DbErr> {
        let tx = transactions::ActiveModel {
            id: Set(id),
            monto: Set(monto),
            ..Default::default()
        };
        tx.update(&self.db).await?;
        Ok(())
    }
}
