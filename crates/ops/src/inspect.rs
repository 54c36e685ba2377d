//! Read-only inspection operations.

use std::fmt;

use estratosfera_db::entities::users;
use estratosfera_db::{
    ClientRepository, ExpenseRepository, InventoryRepository, TransactionRepository,
    UserRepository,
};
use estratosfera_shared::AppResult;
use sea_orm::DatabaseConnection;

use crate::db_err;

/// Row counts across the main tables.
#[derive(Debug, Clone, Copy)]
pub struct TableCounts {
    /// Total clients.
    pub clients: u64,
    /// Total transactions.
    pub transactions: u64,
    /// Total expenses.
    pub expenses: u64,
    /// Total inventory accounts.
    pub inventory_accounts: u64,
}

impl fmt::Display for TableCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Clients: {}", self.clients)?;
        writeln!(f, "Total Transactions: {}", self.transactions)?;
        writeln!(f, "Total Expenses: {}", self.expenses)?;
        write!(f, "Total Inventory Accounts: {}", self.inventory_accounts)
    }
}

/// Counts the rows of each main table.
///
/// # Errors
///
/// Returns an error if any count query fails.
pub async fn table_counts(db: &DatabaseConnection) -> AppResult<TableCounts> {
    Ok(TableCounts {
        clients: ClientRepository::new(db.clone())
            .count()
            .await
            .map_err(db_err)?,
        transactions: TransactionRepository::new(db.clone())
            .count()
            .await
            .map_err(db_err)?,
        expenses: ExpenseRepository::new(db.clone())
            .count()
            .await
            .map_err(db_err)?,
        inventory_accounts: InventoryRepository::new(db.clone())
            .count()
            .await
            .map_err(db_err)?,
    })
}

/// Substring-match count over client names.
#[derive(Debug, Clone)]
pub struct NameMatchReport {
    /// The substring searched for.
    pub needle: String,
    /// Clients whose name contains the needle.
    pub matching: u64,
    /// All clients, for comparison.
    pub total: u64,
}

impl fmt::Display for NameMatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Clients with '{}': {}", self.needle, self.matching)?;
        write!(f, "Total Clients: {}", self.total)
    }
}

/// Counts clients whose name contains `needle` (case-insensitive) next to
/// the total client count.
///
/// # Errors
///
/// Returns an error if a count query fails.
pub async fn name_match_report(
    db: &DatabaseConnection,
    needle: &str,
) -> AppResult<NameMatchReport> {
    let repo = ClientRepository::new(db.clone());
    let matching = repo.count_name_containing(needle).await.map_err(db_err)?;
    let total = repo.count().await.map_err(db_err)?;
    Ok(NameMatchReport {
        needle: needle.to_string(),
        matching,
        total,
    })
}

/// Listing of all user accounts.
#[derive(Debug, Clone)]
pub struct UserListing(pub Vec<users::Model>);

impl fmt::Display for UserListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- USERS IN DB ---")?;
        for user in &self.0 {
            let hash_prefix: String = user.password_hash.chars().take(10).collect();
            writeln!(
                f,
                "ID: {} | Email: {} | Role: {} | Password (hash): {}...",
                user.id, user.email, user.role, hash_prefix
            )?;
        }
        write!(f, "-------------------")
    }
}

/// Fetches every user account.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn list_users(db: &DatabaseConnection) -> AppResult<UserListing> {
    let users = UserRepository::new(db.clone())
        .list_all()
        .await
        .map_err(db_err)?;
    Ok(UserListing(users))
}

/// Bounded dump of client phone numbers.
#[derive(Debug, Clone)]
pub struct PhoneDump(pub Vec<(String, String)>);

impl fmt::Display for PhoneDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Client Phones Dump ({} rows):", self.0.len())?;
        for (celular, nombre) in &self.0 {
            writeln!(f, "  {celular} -> {nombre}")?;
        }
        Ok(())
    }
}

/// Fetches the first `limit` `(celular, nombre)` pairs.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn dump_phones(db: &DatabaseConnection, limit: u64) -> AppResult<PhoneDump> {
    let rows = ClientRepository::new(db.clone())
        .phones(limit)
        .await
        .map_err(db_err)?;
    Ok(PhoneDump(rows))
}

/// One renewable account with its billing cut-day and provider.
#[derive(Debug, Clone)]
pub struct RenewableAccount {
    /// Billing cut-day, when configured.
    pub dia_corte: Option<i32>,
    /// Service name.
    pub servicio: String,
    /// Account email.
    pub email: String,
    /// Provider display name, when linked.
    pub provider: Option<String>,
}

/// Listing of renewable accounts ordered by cut-day.
#[derive(Debug, Clone)]
pub struct RenewableListing(pub Vec<RenewableAccount>);

impl fmt::Display for RenewableListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== CUENTAS RENOVABLES Y DÍAS DE CORTE ===")?;
        if self.0.is_empty() {
            return write!(f, "No hay cuentas renovables configuradas.");
        }
        for account in &self.0 {
            let dia = account
                .dia_corte
                .map_or_else(|| "N/A".to_string(), |d| d.to_string());
            let provider = account.provider.as_deref().unwrap_or("Sin Proveedor");
            writeln!(
                f,
                "[Día {dia}] {} - {} ({provider})",
                account.servicio, account.email
            )?;
        }
        Ok(())
    }
}

/// Fetches renewable accounts with their provider names, ordered by
/// billing cut-day.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn renewable_accounts(db: &DatabaseConnection) -> AppResult<RenewableListing> {
    let rows = InventoryRepository::new(db.clone())
        .renewables()
        .await
        .map_err(db_err)?;
    Ok(RenewableListing(
        rows.into_iter()
            .map(|(account, provider)| RenewableAccount {
                dia_corte: account.dia_corte,
                servicio: account.servicio,
                email: account.email,
                provider: provider.map(|p| p.nombre),
            })
            .collect(),
    ))
}
