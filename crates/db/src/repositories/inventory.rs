//! Inventory account repository for database operations.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{inventory_accounts, providers};

/// Inventory account repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    db: DatabaseConnection,
}

impl InventoryRepository {
    /// Creates a new inventory repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all inventory accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr> {
        inventory_accounts::Entity::find().count(&self.db).await
    }

    /// Fetches all renewable accounts with their provider, ordered by
    /// billing cut-day.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn renewables(
        &self,
    ) -> Result<Vec<(inventory_accounts::Model, Option<providers::Model>)>, DbErr> {
        inventory_accounts::Entity::find()
            .filter(inventory_accounts::Column::IsDisposable.eq(false))
            .find_also_related(providers::Entity)
            .order_by_asc(inventory_accounts::Column::DiaCorte)
            .all(&self.db)
            .await
    }

    /// Counts the accounts linked to a provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_by_provider(&self, provider_id: i32) -> Result<u64, DbErr> {
        inventory_accounts::Entity::find()
            .filter(inventory_accounts::Column::ProviderId.eq(provider_id))
            .count(&self.db)
            .await
    }

    /// Unlinks every account from a provider, returning how many rows
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn unlink_provider(&self, provider_id: i32) -> Result<u64, DbErr> {
        let result = inventory_accounts::Entity::update_many()
            .col_expr(
                inventory_accounts::Column::ProviderId,
                Expr::value(Option::<i32>::None),
            )
            .filter(inventory_accounts::Column::ProviderId.eq(provider_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Creates a new inventory account.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        servicio: &str,
        email: &str,
        dia_corte: Option<i32>,
        is_disposable: bool,
        provider_id: Option<i32>,
    ) -> Result<inventory_accounts::Model, DbErr> {
        let account = inventory_accounts::ActiveModel {
            id: NotSet,
            servicio: Set(servicio.to_string()),
            email: Set(email.to_string()),
            dia_corte: Set(dia_corte),
            is_disposable: Set(is_disposable),
            provider_id: Set(provider_id),
        };
        account.insert(&self.db).await
    }
}
