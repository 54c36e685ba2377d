//! `SeaORM` Entity for the transactions table.
//!
//! `monto` is a signed whole-peso amount; negative values are invariant
//! violations discovered and corrected by the repair operations.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cliente_id: String,
    pub perfil_id: i32,
    pub monto: i64,
    pub estado_pago: String,
    pub fecha_inicio: DateTimeUtc,
    pub fecha_vencimiento: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clients::Entity",
        from = "Column::ClienteId",
        to = "super::clients::Column::Id"
    )]
    Clients,
    #[sea_orm(
        belongs_to = "super::sales_profiles::Entity",
        from = "Column::PerfilId",
        to = "super::sales_profiles::Column::Id"
    )]
    SalesProfiles,
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clients.def()
    }
}

impl Related<super::sales_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalesProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
