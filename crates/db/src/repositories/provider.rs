//! Provider repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, Set,
};

use crate::entities::providers;

/// Provider repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ProviderRepository {
    db: DatabaseConnection,
}

impl ProviderRepository {
    /// Creates a new provider repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a provider by its unique name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_nombre(&self, nombre: &str) -> Result<Option<providers::Model>, DbErr> {
        providers::Entity::find()
            .filter(providers::Column::Nombre.eq(nombre))
            .one(&self.db)
            .await
    }

    /// Deletes a provider row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, provider: providers::Model) -> Result<(), DbErr> {
        provider.delete(&self.db).await?;
        Ok(())
    }

    /// Creates a new provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, nombre: &str) -> Result<providers::Model, DbErr> {
        let provider = providers::ActiveModel {
            id: NotSet,
            nombre: Set(nombre.to_string()),
        };
        provider.insert(&self.db).await
    }
}
