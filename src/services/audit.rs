//! Append-only audit trail of committed mutations.

use chrono::{DateTime, Utc};
use metrics::counter;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::debug;
use uuid::Uuid;

use crate::actor::ActorContext;
use crate::documents::{DocumentRow, MutationEvent};
use crate::entities::audit_records;
use crate::errors::ServiceError;

/// `{DocumentType}_{EVENT}`, e.g. `POItems_CREATE`.
pub fn status_label(row: &DocumentRow, event: MutationEvent) -> String {
    format!("{}_{}", row.document_type(), event)
}

/// Append one audit record for a mutated row.
///
/// Must run on the mutation's transaction so a failed insert rolls the
/// whole mutation back.
pub async fn record<C: ConnectionTrait>(
    db: &C,
    row: &DocumentRow,
    event: MutationEvent,
    actor: &ActorContext,
    now: DateTime<Utc>,
) -> Result<audit_records::Model, ServiceError> {
    let document_type = row.document_type();
    let entry = audit_records::ActiveModel {
        id: Set(Uuid::now_v7()),
        target_document_id: Set(row.target_document_id()),
        document_type: Set(document_type.to_string()),
        event: Set(event.to_string()),
        status_label: Set(status_label(row, event)),
        actor: Set(actor.id().to_string()),
        recorded_at: Set(now),
    }
    .insert(db)
    .await?;

    counter!("procurement.audit.recorded", 1, "document" => document_type.as_str());
    debug!(
        audit_id = %entry.id,
        target = %entry.target_document_id,
        label = %entry.status_label,
        actor = %entry.actor,
        "audit record written"
    );
    Ok(entry)
}

/// Audit records for a document, oldest first.
///
/// Ids are time-ordered v7 UUIDs, so records sharing a timestamp come back
/// in insertion order.
pub async fn trail<C: ConnectionTrait>(db: &C, document_id: &str) -> Result<Vec<audit_records::Model>, ServiceError> {
    Ok(audit_records::Entity::find()
        .filter(audit_records::Column::TargetDocumentId.eq(document_id))
        .order_by_asc(audit_records::Column::RecordedAt)
        .order_by_asc(audit_records::Column::Id)
        .all(db)
        .await?)
}
