use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::document_status::ActiveStatus;

/// The `materials` master data table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mm_id: String,
    #[sea_orm(unique)]
    pub code: String,
    pub description: Option<String>,
    pub gst_no: String,
    pub std_price: Decimal,
    pub is_active: ActiveStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::po_items::Entity")]
    PoItems,
}

impl Related<super::po_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PoItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
