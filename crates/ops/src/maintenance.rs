//! Targeted maintenance operations: single-row deletes and probe inserts.

use std::fmt;

use chrono::{TimeZone, Utc};
use estratosfera_db::entities::transactions;
use estratosfera_db::repositories::NewTransaction;
use estratosfera_db::{InventoryRepository, ProviderRepository, TransactionRepository};
use estratosfera_shared::AppResult;
use sea_orm::DatabaseConnection;

use crate::db_err;

/// Outcome of a delete-by-id, keeping the two cases distinct.
#[derive(Debug, Clone)]
pub enum TransactionDeletion {
    /// The row existed; its prior field values are carried here.
    Deleted(Box<transactions::Model>),
    /// No row had the id; nothing was deleted.
    NotFound(i32),
}

impl fmt::Display for TransactionDeletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deleted(tx) => write!(
                f,
                "Deleted transaction {}: cliente {}, monto {}, estado {}",
                tx.id, tx.cliente_id, tx.monto, tx.estado_pago
            ),
            Self::NotFound(id) => write!(f, "Transaction {id} not found."),
        }
    }
}

/// Deletes one transaction by id, reporting its prior values.
///
/// # Errors
///
/// Returns an error if the fetch or delete fails.
pub async fn delete_transaction(
    db: &DatabaseConnection,
    id: i32,
) -> AppResult<TransactionDeletion> {
    let deleted = TransactionRepository::new(db.clone())
        .delete_by_id(id)
        .await
        .map_err(db_err)?;

    Ok(match deleted {
        Some(tx) => TransactionDeletion::Deleted(Box::new(tx)),
        None => TransactionDeletion::NotFound(id),
    })
}

/// Outcome of a provider deletion.
#[derive(Debug, Clone)]
pub enum ProviderDeletion {
    /// The provider was removed after unlinking its accounts.
    Deleted {
        /// The provider's display name.
        nombre: String,
        /// Accounts whose `provider_id` was cleared first.
        unlinked_accounts: u64,
    },
    /// No provider had the name; nothing was deleted.
    NotFound(String),
}

impl fmt::Display for ProviderDeletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deleted {
                nombre,
                unlinked_accounts,
            } => write!(
                f,
                "Provider '{nombre}' deleted ({unlinked_accounts} accounts unlinked)."
            ),
            Self::NotFound(nombre) => write!(f, "Provider '{nombre}' not found."),
        }
    }
}

/// Deletes a provider by its unique name.
///
/// Accounts still linked to the provider are unlinked first so the row
/// can go; they survive with no provider.
///
/// # Errors
///
/// Returns an error if any query or mutation fails.
pub async fn delete_provider(db: &DatabaseConnection, nombre: &str) -> AppResult<ProviderDeletion> {
    let providers = ProviderRepository::new(db.clone());
    let Some(provider) = providers.find_by_nombre(nombre).await.map_err(db_err)? else {
        return Ok(ProviderDeletion::NotFound(nombre.to_string()));
    };

    let inventory = InventoryRepository::new(db.clone());
    let linked = inventory
        .count_by_provider(provider.id)
        .await
        .map_err(db_err)?;
    let unlinked_accounts = if linked > 0 {
        inventory
            .unlink_provider(provider.id)
            .await
            .map_err(db_err)?
    } else {
        0
    };

    let nombre = provider.nombre.clone();
    providers.delete(provider).await.map_err(db_err)?;

    Ok(ProviderDeletion::Deleted {
        nombre,
        unlinked_accounts,
    })
}

/// Fixed field values of the probe transaction.
pub const PROBE_TRANSACTION_ID: i32 = 99999;
const PROBE_CLIENTE_ID: &str = "TEST_CLIENT";
const PROBE_PERFIL_ID: i32 = 9999;
const PROBE_MONTO: i64 = 12345;
const PROBE_ESTADO: &str = "PAGADO";

/// Inserts the fixed probe transaction used to verify that stored field
/// values survive a round trip unchanged.
///
/// # Errors
///
/// Returns an error if the insert fails (including when the probe row
/// already exists).
pub async fn insert_probe_transaction(
    db: &DatabaseConnection,
) -> AppResult<transactions::Model> {
    TransactionRepository::new(db.clone())
        .create(NewTransaction {
            id: PROBE_TRANSACTION_ID,
            cliente_id: PROBE_CLIENTE_ID.to_string(),
            perfil_id: PROBE_PERFIL_ID,
            monto: PROBE_MONTO,
            estado_pago: PROBE_ESTADO.to_string(),
            fecha_inicio: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            fecha_vencimiento: Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap(),
        })
        .await
        .map_err(db_err)
}
