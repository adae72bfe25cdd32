//! Mutation pipeline.
//!
//! One mutation runs in one transaction: validation gate, row write,
//! recalculation, audit record, commit. A rejection or a failure at any step
//! rolls back everything the mutation wrote, audit record included.

use std::sync::Arc;

use chrono::Utc;
use metrics::counter;
use sea_orm::{ConnectionTrait, TransactionTrait};
use serde::Serialize;
use tracing::{error, info, instrument, warn};

use super::validation::ValidationGate;
use super::{aggregates, audit, reconciliation, store, EnginePolicy};
use crate::actor::ActorContext;
use crate::db::DbPool;
use crate::documents::{DocumentRow, DocumentType, Mutation, MutationEvent, PoLineKey, RecalcStrategy};
use crate::entities::audit_records;
use crate::errors::ServiceError;

/// Result of a committed mutation.
#[derive(Debug, Clone, Serialize)]
pub struct MutationOutcome {
    pub event: MutationEvent,
    /// The row after recalculation, or the snapshot of a deleted row.
    pub row: DocumentRow,
    pub audit: audit_records::Model,
}

impl MutationOutcome {
    pub fn document_type(&self) -> DocumentType {
        self.row.document_type()
    }
}

#[derive(Clone)]
pub struct Ledger {
    db: Arc<DbPool>,
    gate: ValidationGate,
}

impl Ledger {
    pub fn new(db: Arc<DbPool>, policy: EnginePolicy) -> Self {
        Self {
            db,
            gate: ValidationGate::new(policy),
        }
    }

    pub fn policy(&self) -> &EnginePolicy {
        self.gate.policy()
    }

    #[instrument(skip(self, mutation, actor), fields(label = %mutation.status_label(), actor = %actor.id()))]
    pub async fn apply(&self, mutation: Mutation, actor: &ActorContext) -> Result<MutationOutcome, ServiceError> {
        let document_type = mutation.document_type();
        let event = mutation.event();
        let txn = self.db.begin().await?;

        if let Err(err) = self.gate.check(&txn, &mutation).await {
            if let Err(rollback_err) = txn.rollback().await {
                warn!("rollback after rejection failed: {}", rollback_err);
            }
            counter!(
                "procurement.mutation.rejected",
                1,
                "document" => document_type.as_str(),
                "reason" => err.kind()
            );
            warn!(status = err.status_code().as_u16(), "mutation rejected: {}", err);
            return Err(err);
        }

        let outcome = match run(&txn, mutation, event, actor).await {
            Ok(outcome) => outcome,
            Err(err) => {
                if err.is_rejection() {
                    warn!(status = err.status_code().as_u16(), "mutation rejected during write: {}", err);
                } else {
                    error!("mutation failed, rolling back: {}", err);
                }
                if let Err(rollback_err) = txn.rollback().await {
                    error!("rollback failed: {}", rollback_err);
                }
                return Err(err);
            }
        };

        txn.commit().await.map_err(|e| {
            error!("commit failed: {}", e);
            ServiceError::DatabaseError(e)
        })?;

        counter!(
            "procurement.mutation.committed",
            1,
            "document" => document_type.as_str(),
            "event" => event.as_str()
        );
        info!(
            target_document = %outcome.audit.target_document_id,
            audit_id = %outcome.audit.id,
            "mutation committed"
        );
        Ok(outcome)
    }
}

async fn run<C: ConnectionTrait>(
    db: &C,
    mutation: Mutation,
    event: MutationEvent,
    actor: &ActorContext,
) -> Result<MutationOutcome, ServiceError> {
    let now = Utc::now();
    let row = store::write(db, mutation, actor, now).await?;
    let row = recalculate(db, row, event).await?;
    let audit = audit::record(db, &row, event, actor, now).await?;
    Ok(MutationOutcome { event, row, audit })
}

/// Refresh everything derived from a mutated row.
///
/// For a delete, `row` is the pre-delete snapshot and only the owning
/// documents are refreshed.
pub async fn recalculate<C: ConnectionTrait>(
    db: &C,
    row: DocumentRow,
    event: MutationEvent,
) -> Result<DocumentRow, ServiceError> {
    let deleted = event == MutationEvent::Delete;
    match (row.document_type().recalc_strategy(), row) {
        (RecalcStrategy::PurchaseOrderLine, DocumentRow::PoItem(item)) => {
            let item = if deleted {
                item
            } else {
                aggregates::refresh_po_item(db, item).await?
            };
            aggregates::recalc_po_total(db, &item.po_id).await?;
            Ok(DocumentRow::PoItem(item))
        }
        (RecalcStrategy::GoodsReceiptLine, DocumentRow::GrItem(item)) => {
            let line = PoLineKey::new(item.po_id.clone(), item.po_line_number);
            reconciliation::propagate_receipts(db, &line).await?;
            Ok(DocumentRow::GrItem(item))
        }
        (RecalcStrategy::InvoiceLine, DocumentRow::InvoiceItem(item)) => {
            let item = if deleted {
                item
            } else {
                aggregates::refresh_invoice_item(db, item).await?
            };
            aggregates::recalc_invoice_totals(db, &item.inv_id).await?;
            Ok(DocumentRow::InvoiceItem(item))
        }
        (_, row) => Ok(row),
    }
}
