//! Client repository for database operations.

use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QuerySelect, Set,
};

use crate::entities::clients;

/// Client repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    db: DatabaseConnection,
}

impl ClientRepository {
    /// Creates a new client repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Case-insensitive substring filter over `nombre`.
    ///
    /// Count and fetch share this expression so their results always
    /// agree, whatever the backend's LIKE collation does.
    fn name_contains(needle: &str) -> SimpleExpr {
        Expr::expr(Func::lower(Expr::col((
            clients::Entity,
            clients::Column::Nombre,
        ))))
        .like(format!("%{}%", needle.to_lowercase()))
    }

    /// Counts all clients.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr> {
        clients::Entity::find().count(&self.db).await
    }

    /// Counts clients whose name contains `needle`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_name_containing(&self, needle: &str) -> Result<u64, DbErr> {
        clients::Entity::find()
            .filter(Self::name_contains(needle))
            .count(&self.db)
            .await
    }

    /// Fetches all clients whose name contains `needle`, with no row limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_name_containing(&self, needle: &str) -> Result<Vec<clients::Model>, DbErr> {
        clients::Entity::find()
            .filter(Self::name_contains(needle))
            .all(&self.db)
            .await
    }

    /// Fetches every client.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_all(&self) -> Result<Vec<clients::Model>, DbErr> {
        clients::Entity::find().all(&self.db).await
    }

    /// Fetches the first `limit` `(celular, nombre)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn phones(&self, limit: u64) -> Result<Vec<(String, String)>, DbErr> {
        clients::Entity::find()
            .select_only()
            .column(clients::Column::Celular)
            .column(clients::Column::Nombre)
            .limit(limit)
            .into_tuple()
            .all(&self.db)
            .await
    }

    /// Rewrites a client's display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update_name(&self, id: &str, nombre: &str) -> Result<(), DbErr> {
        let client = clients::ActiveModel {
            id: Set(id.to_string()),
            nombre: Set(nombre.to_string()),
            ..Default::default()
        };
        client.update(&self.db).await?;
        Ok(())
    }

    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        id: &str,
        nombre: &str,
        celular: &str,
    ) -> Result<clients::Model, DbErr> {
        let client = clients::ActiveModel {
            id: Set(id.to_string()),
            nombre: Set(nombre.to_string()),
            celular: Set(celular.to_string()),
            created_at: Set(Utc::now()),
        };
        client.insert(&self.db).await
    }
}
