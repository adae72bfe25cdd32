use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::entities::{materials, vendors, ActiveStatus};
use crate::errors::ServiceError;

/// True when a vendor with this code exists, active or not.
pub async fn vendor_exists<C: ConnectionTrait>(db: &C, code: &str) -> Result<bool, ServiceError> {
    let count = vendors::Entity::find()
        .filter(vendors::Column::Code.eq(code))
        .count(db)
        .await?;
    Ok(count > 0)
}

pub async fn active_vendors<C: ConnectionTrait>(db: &C) -> Result<Vec<vendors::Model>, ServiceError> {
    Ok(vendors::Entity::find()
        .filter(vendors::Column::IsActive.eq(ActiveStatus::Active))
        .order_by_asc(vendors::Column::Code)
        .all(db)
        .await?)
}

pub async fn active_materials<C: ConnectionTrait>(db: &C) -> Result<Vec<materials::Model>, ServiceError> {
    Ok(materials::Entity::find()
        .filter(materials::Column::IsActive.eq(ActiveStatus::Active))
        .order_by_asc(materials::Column::Code)
        .all(db)
        .await?)
}
