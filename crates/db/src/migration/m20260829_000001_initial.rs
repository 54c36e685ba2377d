//! Initial database migration.
//!
//! Creates the users, clients, providers, inventory accounts, sales
//! profiles, transactions, and expenses tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Role).string_len(16).not_null())
                    .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Clients::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Clients::Nombre).string().not_null())
                    .col(
                        ColumnDef::new(Clients::Celular)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Clients::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Providers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Providers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Providers::Nombre)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InventoryAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InventoryAccounts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InventoryAccounts::Servicio).string().not_null())
                    .col(ColumnDef::new(InventoryAccounts::Email).string().not_null())
                    .col(ColumnDef::new(InventoryAccounts::DiaCorte).integer())
                    .col(
                        ColumnDef::new(InventoryAccounts::IsDisposable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(InventoryAccounts::ProviderId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_accounts_provider")
                            .from(InventoryAccounts::Table, InventoryAccounts::ProviderId)
                            .to(Providers::Table, Providers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SalesProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SalesProfiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SalesProfiles::AccountId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_profiles_account")
                            .from(SalesProfiles::Table, SalesProfiles::AccountId)
                            .to(InventoryAccounts::Table, InventoryAccounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::ClienteId).string().not_null())
                    .col(ColumnDef::new(Transactions::PerfilId).integer().not_null())
                    .col(ColumnDef::new(Transactions::Monto).big_integer().not_null())
                    .col(ColumnDef::new(Transactions::EstadoPago).string().not_null())
                    .col(
                        ColumnDef::new(Transactions::FechaInicio)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::FechaVencimiento)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Referential integrity for transactions is intentionally loose:
        // historical imports reference clients and profiles that were
        // deleted along the way, so only an index is kept.
        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_cliente")
                    .table(Transactions::Table)
                    .col(Transactions::ClienteId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::Categoria).string().not_null())
                    .col(ColumnDef::new(Expenses::Monto).big_integer().not_null())
                    .col(ColumnDef::new(Expenses::Fecha).timestamp().not_null())
                    .col(ColumnDef::new(Expenses::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            Expenses::Table.into_iden(),
            Transactions::Table.into_iden(),
            SalesProfiles::Table.into_iden(),
            InventoryAccounts::Table.into_iden(),
            Providers::Table.into_iden(),
            Clients::Table.into_iden(),
            Users::Table.into_iden(),
        ] {
            manager
                .drop_table(Table::drop().table(table).if_exists().to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
    Nombre,
    Celular,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Providers {
    Table,
    Id,
    Nombre,
}

#[derive(DeriveIden)]
enum InventoryAccounts {
    Table,
    Id,
    Servicio,
    Email,
    DiaCorte,
    IsDisposable,
    ProviderId,
}

#[derive(DeriveIden)]
enum SalesProfiles {
    Table,
    Id,
    AccountId,
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    ClienteId,
    PerfilId,
    Monto,
    EstadoPago,
    FechaInicio,
    FechaVencimiento,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Expenses {
    Table,
    Id,
    Categoria,
    Monto,
    Fecha,
    CreatedAt,
}
