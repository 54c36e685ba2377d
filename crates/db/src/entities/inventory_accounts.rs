//! `SeaORM` Entity for the inventory accounts table.
//!
//! `is_disposable` distinguishes single-use accounts from renewable
//! shared accounts that bill on `dia_corte`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub servicio: String,
    pub email: String,
    pub dia_corte: Option<i32>,
    pub is_disposable: bool,
    pub provider_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::providers::Entity",
        from = "Column::ProviderId",
        to = "super::providers::Column::Id"
    )]
    Providers,
    #[sea_orm(has_many = "super::sales_profiles::Entity")]
    SalesProfiles,
}

impl Related<super::providers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Providers.def()
    }
}

impl Related<super::sales_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalesProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
