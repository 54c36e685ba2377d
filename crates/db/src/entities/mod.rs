//! `SeaORM` entity definitions.

pub mod clients;
pub mod expenses;
pub mod inventory_accounts;
pub mod providers;
pub mod sales_profiles;
pub mod sea_orm_active_enums;
pub mod transactions;
pub mod users;
