use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::document_status::DocumentStatus;

/// The `invoice_headers` table. The three amount columns are derived.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoice_headers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub inv_id: String,
    pub invoice_number: Option<String>,
    pub po_id: Option<String>,
    pub inv_date: DateTime<Utc>,
    pub status: DocumentStatus,
    pub totalamt_before: Decimal,
    pub taxamt: Decimal,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::invoice_items::Entity")]
    InvoiceItems,
}

impl Related<super::invoice_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvoiceItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
