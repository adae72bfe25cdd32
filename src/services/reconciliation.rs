//! Goods receipt to purchase order reconciliation.
//!
//! Receipt state of a PO line is always the total of every goods receipt
//! line that references it, never an increment.

use chrono::Utc;
use metrics::counter;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Serialize;
use tracing::{debug, warn};

use super::aggregates;
use crate::documents::{GrLineKey, PoLineKey};
use crate::entities::{gr_items, invoice_items, po_items, PoItemStatus};
use crate::errors::ServiceError;

/// Receipt quantities and status of one PO line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptState {
    pub received_qty: Decimal,
    pub open_qty: Decimal,
    pub status: PoItemStatus,
}

impl ReceiptState {
    /// Open quantity is clamped at zero. Any open quantity left after a
    /// receipt makes the line `partially_received`, except when the summed
    /// receipts are zero (nothing received yet, or every GR item for the
    /// line deleted): that line reads `open` again, same as at creation.
    /// `full_received` holds exactly when the open quantity is zero.
    pub fn derive(ordered_qty: Decimal, received_qty: Decimal) -> Self {
        let open_qty = (ordered_qty - received_qty).max(Decimal::ZERO);
        let status = if open_qty.is_zero() {
            PoItemStatus::FullReceived
        } else if received_qty.is_zero() {
            PoItemStatus::Open
        } else {
            PoItemStatus::PartiallyReceived
        };
        Self {
            received_qty,
            open_qty,
            status,
        }
    }
}

/// Total received against a PO line across all goods receipts.
pub async fn received_quantity<C: ConnectionTrait>(db: &C, line: &PoLineKey) -> Result<Decimal, ServiceError> {
    received_quantity_excluding(db, line, None).await
}

/// Total received against a PO line, leaving out one goods receipt line.
pub async fn received_quantity_excluding<C: ConnectionTrait>(
    db: &C,
    line: &PoLineKey,
    exclude: Option<&GrLineKey>,
) -> Result<Decimal, ServiceError> {
    let receipts = gr_items::Entity::find()
        .filter(gr_items::Column::PoId.eq(line.po_id.as_str()))
        .filter(gr_items::Column::PoLineNumber.eq(line.line_number))
        .all(db)
        .await?;

    Ok(receipts
        .iter()
        .filter(|gr| match exclude {
            Some(key) => !(gr.gr_id == key.gr_id && gr.line_number == key.line_number),
            None => true,
        })
        .map(|gr| gr.received_qty)
        .sum())
}

/// Push the current receipt total of a PO line onto the PO item, then
/// refresh the PO header total.
///
/// A receipt for a line that does not exist is tolerated: nothing is
/// written and `None` is returned.
pub async fn propagate_receipts<C: ConnectionTrait>(
    db: &C,
    line: &PoLineKey,
) -> Result<Option<po_items::Model>, ServiceError> {
    let Some(item) = po_items::Entity::find_by_id((line.po_id.clone(), line.line_number))
        .one(db)
        .await?
    else {
        warn!(
            po_id = %line.po_id,
            po_line_number = line.line_number,
            "goods receipt references a PO line that does not exist; skipping reconciliation"
        );
        counter!("procurement.reconciliation.orphaned", 1);
        return Ok(None);
    };

    let received = received_quantity(db, line).await?;
    let state = ReceiptState::derive(item.ordered_qty, received);

    let mut active: po_items::ActiveModel = item.into();
    active.received_qty = Set(state.received_qty);
    active.open_qty = Set(state.open_qty);
    active.status = Set(state.status);
    active.updated_at = Set(Utc::now());
    let updated = active.update(db).await?;

    debug!(
        po_id = %line.po_id,
        po_line_number = line.line_number,
        received = %state.received_qty,
        open = %state.open_qty,
        status = %state.status,
        "receipts propagated"
    );

    aggregates::recalc_po_total(db, &line.po_id).await?;
    Ok(Some(updated))
}

/// Outcome of comparing ordered, received and invoiced quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchStatus {
    Matched,
    AwaitingReceipt,
    AwaitingInvoice,
    OverReceived,
    OverInvoiced,
}

impl MatchStatus {
    pub fn evaluate(ordered: Decimal, received: Decimal, invoiced: Decimal) -> Self {
        if received > ordered {
            MatchStatus::OverReceived
        } else if invoiced > received {
            MatchStatus::OverInvoiced
        } else if received < ordered {
            MatchStatus::AwaitingReceipt
        } else if invoiced < received {
            MatchStatus::AwaitingInvoice
        } else {
            MatchStatus::Matched
        }
    }
}

/// One row of the three-way match report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    pub po_id: String,
    pub line_number: i32,
    pub ordered_qty: Decimal,
    pub received_qty: Decimal,
    pub invoiced_qty: Decimal,
    pub status: MatchStatus,
}

/// Compare ordered, received and invoiced quantities for every line of a
/// purchase order, ordered by line number.
pub async fn three_way_match<C: ConnectionTrait>(db: &C, po_id: &str) -> Result<Vec<LineMatch>, ServiceError> {
    let lines = po_items::Entity::find()
        .filter(po_items::Column::PoId.eq(po_id))
        .order_by_asc(po_items::Column::LineNumber)
        .all(db)
        .await?;
    let receipts = gr_items::Entity::find()
        .filter(gr_items::Column::PoId.eq(po_id))
        .all(db)
        .await?;
    let invoiced = invoice_items::Entity::find()
        .filter(invoice_items::Column::PoId.eq(po_id))
        .all(db)
        .await?;

    Ok(lines
        .into_iter()
        .map(|line| {
            let received_qty: Decimal = receipts
                .iter()
                .filter(|gr| gr.po_line_number == line.line_number)
                .map(|gr| gr.received_qty)
                .sum();
            let invoiced_qty: Decimal = invoiced
                .iter()
                .filter(|inv| inv.po_line_number == Some(line.line_number))
                .map(|inv| inv.invoiced_qty)
                .sum();
            LineMatch {
                status: MatchStatus::evaluate(line.ordered_qty, received_qty, invoiced_qty),
                po_id: line.po_id,
                line_number: line.line_number,
                ordered_qty: line.ordered_qty,
                received_qty,
                invoiced_qty,
            }
        })
        .collect())
}
