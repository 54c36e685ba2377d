//! `SeaORM` Entity for the sales profiles table.
//!
//! A sales profile is one sellable slot of a shared inventory account;
//! transactions attribute revenue to a specific slot through it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sales_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inventory_accounts::Entity",
        from = "Column::AccountId",
        to = "super::inventory_accounts::Column::Id"
    )]
    InventoryAccounts,
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::inventory_accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryAccounts.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
