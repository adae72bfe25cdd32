use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Receipt state of a single purchase order line.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PoItemStatus {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "partially_received")]
    PartiallyReceived,
    #[sea_orm(string_value = "full_received")]
    FullReceived,
}

/// The `po_items` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "po_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub po_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub line_number: i32,
    pub material_id: Option<String>,
    pub ordered_qty: Decimal,
    pub net_price: Decimal,
    pub discount_pct: Decimal,
    pub gst_pct: Decimal,
    pub netprice_value: Decimal,
    pub received_qty: Decimal,
    pub open_qty: Decimal,
    pub status: PoItemStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::po_headers::Entity",
        from = "Column::PoId",
        to = "super::po_headers::Column::PoId"
    )]
    PoHeader,
    #[sea_orm(
        belongs_to = "super::materials::Entity",
        from = "Column::MaterialId",
        to = "super::materials::Column::MmId"
    )]
    Material,
}

impl Related<super::po_headers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PoHeader.def()
    }
}

impl Related<super::materials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
