use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The `gr_items` table.
///
/// `(po_id, po_line_number)` points at the purchase order line this receipt
/// is reconciled against. The reference is not enforced by a foreign key; a
/// receipt for an unknown line is tolerated and reported.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gr_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub gr_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub line_number: i32,
    pub po_id: String,
    pub po_line_number: i32,
    pub received_qty: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gr_headers::Entity",
        from = "Column::GrId",
        to = "super::gr_headers::Column::GrId"
    )]
    GrHeader,
}

impl Related<super::gr_headers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GrHeader.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
