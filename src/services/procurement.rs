use std::sync::Arc;

use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;

use super::ledger::{Ledger, MutationOutcome};
use super::reconciliation::LineMatch;
use super::{audit, master_data, reconciliation, EnginePolicy};
use crate::actor::ActorContext;
use crate::db::DbPool;
use crate::documents::{DocumentRow, InvoiceLineKey, Mutation, PoLineKey, PoTransition};
use crate::entities::{
    audit_records, gr_items, invoice_headers, invoice_items, materials, po_headers, po_items,
    vendors, ActiveStatus, PoStatus,
};
use crate::errors::ServiceError;

/// Service for purchase orders, goods receipts, invoices and their master
/// data.
///
/// Every write goes through [`ProcurementService::apply`] or one of the
/// action shorthands, which funnel into the same transactional pipeline.
#[derive(Clone)]
pub struct ProcurementService {
    db_pool: Arc<DbPool>,
    ledger: Ledger,
}

impl ProcurementService {
    pub fn new(db_pool: Arc<DbPool>, policy: EnginePolicy) -> Self {
        let ledger = Ledger::new(db_pool.clone(), policy);
        Self { db_pool, ledger }
    }

    pub fn policy(&self) -> &EnginePolicy {
        self.ledger.policy()
    }

    /// Validate, write, recalculate and audit a single mutation atomically.
    pub async fn apply(&self, mutation: Mutation, actor: &ActorContext) -> Result<MutationOutcome, ServiceError> {
        self.ledger.apply(mutation, actor).await
    }

    async fn transition(
        &self,
        po_id: &str,
        transition: PoTransition,
        actor: &ActorContext,
    ) -> Result<po_headers::Model, ServiceError> {
        let outcome = self
            .apply(
                Mutation::TransitionPo {
                    po_id: po_id.to_string(),
                    transition,
                },
                actor,
            )
            .await?;
        match outcome.row {
            DocumentRow::PoHeader(header) => Ok(header),
            other => Err(unexpected_row("PO header", &other)),
        }
    }

    #[instrument(skip(self, actor))]
    pub async fn submit_po(&self, po_id: &str, actor: &ActorContext) -> Result<po_headers::Model, ServiceError> {
        self.transition(po_id, PoTransition::Submit, actor).await
    }

    /// Approve a purchase order, stamping the approver and approval time.
    #[instrument(skip(self, actor))]
    pub async fn approve_po(&self, po_id: &str, actor: &ActorContext) -> Result<po_headers::Model, ServiceError> {
        self.transition(po_id, PoTransition::Approve, actor).await
    }

    /// Reject a purchase order; the reason is kept in `remarks`.
    #[instrument(skip(self, actor))]
    pub async fn reject_po(
        &self,
        po_id: &str,
        reason: &str,
        actor: &ActorContext,
    ) -> Result<po_headers::Model, ServiceError> {
        self.transition(
            po_id,
            PoTransition::Reject {
                reason: reason.to_string(),
            },
            actor,
        )
        .await
    }

    /// Close a purchase order. A closed PO rejects every further change.
    #[instrument(skip(self, actor))]
    pub async fn close_po(&self, po_id: &str, actor: &ActorContext) -> Result<po_headers::Model, ServiceError> {
        self.transition(po_id, PoTransition::Close, actor).await
    }

    /// Stored total of a purchase order; zero when the PO does not exist.
    #[instrument(skip(self))]
    pub async fn get_po_total(&self, po_id: &str) -> Result<Decimal, ServiceError> {
        Ok(self
            .get_purchase_order(po_id)
            .await?
            .map(|header| header.total_value)
            .unwrap_or(Decimal::ZERO))
    }

    /// Workflow status of a purchase order, `None` when it does not exist.
    #[instrument(skip(self))]
    pub async fn get_po_status(&self, po_id: &str) -> Result<Option<PoStatus>, ServiceError> {
        Ok(self.get_purchase_order(po_id).await?.map(|header| header.status))
    }

    pub async fn activate_vendor(&self, vm_id: &str, actor: &ActorContext) -> Result<vendors::Model, ServiceError> {
        self.set_vendor_activation(vm_id, ActiveStatus::Active, actor).await
    }

    pub async fn deactivate_vendor(&self, vm_id: &str, actor: &ActorContext) -> Result<vendors::Model, ServiceError> {
        self.set_vendor_activation(vm_id, ActiveStatus::Inactive, actor).await
    }

    #[instrument(skip(self, actor))]
    async fn set_vendor_activation(
        &self,
        vm_id: &str,
        status: ActiveStatus,
        actor: &ActorContext,
    ) -> Result<vendors::Model, ServiceError> {
        let outcome = self
            .apply(
                Mutation::SetVendorActivation {
                    vm_id: vm_id.to_string(),
                    status,
                },
                actor,
            )
            .await?;
        match outcome.row {
            DocumentRow::Vendor(vendor) => Ok(vendor),
            other => Err(unexpected_row("vendor", &other)),
        }
    }

    pub async fn activate_material(&self, mm_id: &str, actor: &ActorContext) -> Result<materials::Model, ServiceError> {
        self.set_material_activation(mm_id, ActiveStatus::Active, actor).await
    }

    pub async fn deactivate_material(
        &self,
        mm_id: &str,
        actor: &ActorContext,
    ) -> Result<materials::Model, ServiceError> {
        self.set_material_activation(mm_id, ActiveStatus::Inactive, actor).await
    }

    #[instrument(skip(self, actor))]
    async fn set_material_activation(
        &self,
        mm_id: &str,
        status: ActiveStatus,
        actor: &ActorContext,
    ) -> Result<materials::Model, ServiceError> {
        let outcome = self
            .apply(
                Mutation::SetMaterialActivation {
                    mm_id: mm_id.to_string(),
                    status,
                },
                actor,
            )
            .await?;
        match outcome.row {
            DocumentRow::Material(material) => Ok(material),
            other => Err(unexpected_row("material", &other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn vendor_exists(&self, code: &str) -> Result<bool, ServiceError> {
        master_data::vendor_exists(&*self.db_pool, code).await
    }

    pub async fn get_active_vendors(&self) -> Result<Vec<vendors::Model>, ServiceError> {
        master_data::active_vendors(&*self.db_pool).await
    }

    pub async fn get_active_materials(&self) -> Result<Vec<materials::Model>, ServiceError> {
        master_data::active_materials(&*self.db_pool).await
    }

    /// Ordered, received and invoiced quantities per line of a purchase order.
    #[instrument(skip(self))]
    pub async fn three_way_match(&self, po_id: &str) -> Result<Vec<LineMatch>, ServiceError> {
        reconciliation::three_way_match(&*self.db_pool, po_id).await
    }

    /// Audit records for a document id, oldest first.
    #[instrument(skip(self))]
    pub async fn audit_trail(&self, document_id: &str) -> Result<Vec<audit_records::Model>, ServiceError> {
        audit::trail(&*self.db_pool, document_id).await
    }

    pub async fn get_purchase_order(&self, po_id: &str) -> Result<Option<po_headers::Model>, ServiceError> {
        Ok(po_headers::Entity::find_by_id(po_id.to_string())
            .one(&*self.db_pool)
            .await?)
    }

    pub async fn get_po_item(&self, key: &PoLineKey) -> Result<Option<po_items::Model>, ServiceError> {
        Ok(po_items::Entity::find_by_id((key.po_id.clone(), key.line_number))
            .one(&*self.db_pool)
            .await?)
    }

    pub async fn get_po_items(&self, po_id: &str) -> Result<Vec<po_items::Model>, ServiceError> {
        Ok(po_items::Entity::find()
            .filter(po_items::Column::PoId.eq(po_id))
            .order_by_asc(po_items::Column::LineNumber)
            .all(&*self.db_pool)
            .await?)
    }

    /// Goods receipt lines posted against a purchase order.
    pub async fn get_receipts_for_po(&self, po_id: &str) -> Result<Vec<gr_items::Model>, ServiceError> {
        Ok(gr_items::Entity::find()
            .filter(gr_items::Column::PoId.eq(po_id))
            .order_by_asc(gr_items::Column::PoLineNumber)
            .all(&*self.db_pool)
            .await?)
    }

    pub async fn get_invoice(&self, inv_id: &str) -> Result<Option<invoice_headers::Model>, ServiceError> {
        Ok(invoice_headers::Entity::find_by_id(inv_id.to_string())
            .one(&*self.db_pool)
            .await?)
    }

    pub async fn get_invoice_item(
        &self,
        key: &InvoiceLineKey,
    ) -> Result<Option<invoice_items::Model>, ServiceError> {
        Ok(invoice_items::Entity::find_by_id((key.inv_id.clone(), key.line_number))
            .one(&*self.db_pool)
            .await?)
    }
}

fn unexpected_row(expected: &str, row: &DocumentRow) -> ServiceError {
    ServiceError::InternalError(format!(
        "expected a {} row, pipeline returned {}",
        expected,
        row.document_type()
    ))
}
