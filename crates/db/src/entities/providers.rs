//! `SeaORM` Entity for the providers table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "providers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nombre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inventory_accounts::Entity")]
    InventoryAccounts,
}

impl Related<super::inventory_accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryAccounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
