use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::document_status::ActiveStatus;

/// The `vendors` master data table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vm_id: String,
    #[sea_orm(unique)]
    pub code: String,
    pub name: Option<String>,
    pub gst_no: String,
    pub is_active: ActiveStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::po_headers::Entity")]
    PoHeaders,
}

impl Related<super::po_headers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PoHeaders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
