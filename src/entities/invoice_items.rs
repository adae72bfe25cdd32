use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The `invoice_items` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoice_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub inv_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub line_number: i32,
    pub po_id: Option<String>,
    pub po_line_number: Option<i32>,
    pub invoiced_qty: Decimal,
    pub net_price: Decimal,
    pub discount_pct: Decimal,
    pub gst_pct: Decimal,
    pub netamt: Decimal,
    pub taxamt: Decimal,
    pub totalamt: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::invoice_headers::Entity",
        from = "Column::InvId",
        to = "super::invoice_headers::Column::InvId"
    )]
    InvoiceHeader,
}

impl Related<super::invoice_headers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvoiceHeader.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
