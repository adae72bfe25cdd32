use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::document_status::DocumentStatus;

/// The `gr_headers` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gr_headers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub gr_id: String,
    pub gr_date: DateTime<Utc>,
    pub status: DocumentStatus,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gr_items::Entity")]
    GrItems,
}

impl Related<super::gr_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GrItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
