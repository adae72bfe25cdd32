//! Derived values kept on purchase order and invoice documents.
//!
//! Every function re-derives from the rows currently visible on the given
//! connection, so calling it inside the mutation's transaction sees the
//! mutation's own write.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use serde::Serialize;
use tracing::debug;

use super::pricing::{po_line_value, LineAmounts};
use super::reconciliation;
use crate::documents::PoLineKey;
use crate::entities::{invoice_headers, invoice_items, po_headers, po_items};
use crate::errors::ServiceError;

/// Header totals of an invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    pub totalamt_before: Decimal,
    pub taxamt: Decimal,
    pub total_amount: Decimal,
}

impl InvoiceTotals {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a invoice_items::Model>) -> Self {
        items.into_iter().fold(Self::default(), |acc, item| Self {
            totalamt_before: acc.totalamt_before + item.netamt,
            taxamt: acc.taxamt + item.taxamt,
            total_amount: acc.total_amount + item.totalamt,
        })
    }
}

/// Re-derive a purchase order line: its value from price and quantity, and
/// its receipt state from the goods receipts posted against it.
pub async fn refresh_po_item<C: ConnectionTrait>(
    db: &C,
    item: po_items::Model,
) -> Result<po_items::Model, ServiceError> {
    let key = PoLineKey::new(item.po_id.clone(), item.line_number);
    let received = reconciliation::received_quantity(db, &key).await?;
    let state = reconciliation::ReceiptState::derive(item.ordered_qty, received);
    let value = po_line_value(item.ordered_qty, item.net_price, item.discount_pct, item.gst_pct);

    let mut active: po_items::ActiveModel = item.into();
    active.netprice_value = Set(value);
    active.received_qty = Set(state.received_qty);
    active.open_qty = Set(state.open_qty);
    active.status = Set(state.status);
    active.updated_at = Set(Utc::now());
    Ok(active.update(db).await?)
}

/// Recompute `total_value` of a purchase order header from its items.
///
/// Returns the new total. A missing header is not an error; the total is
/// still returned.
pub async fn recalc_po_total<C: ConnectionTrait>(db: &C, po_id: &str) -> Result<Decimal, ServiceError> {
    let items = po_items::Entity::find()
        .filter(po_items::Column::PoId.eq(po_id))
        .all(db)
        .await?;
    let total: Decimal = items.iter().map(|item| item.netprice_value).sum();

    if let Some(header) = po_headers::Entity::find_by_id(po_id.to_string()).one(db).await? {
        if header.total_value != total {
            let mut active: po_headers::ActiveModel = header.into();
            active.total_value = Set(total);
            active.updated_at = Set(Utc::now());
            active.update(db).await?;
        }
    }

    debug!(po_id, %total, items = items.len(), "purchase order total recalculated");
    Ok(total)
}

/// Re-derive net, tax and total amounts of an invoice line.
pub async fn refresh_invoice_item<C: ConnectionTrait>(
    db: &C,
    item: invoice_items::Model,
) -> Result<invoice_items::Model, ServiceError> {
    let amounts = LineAmounts::compute(item.invoiced_qty, item.net_price, item.discount_pct, item.gst_pct);

    let mut active: invoice_items::ActiveModel = item.into();
    active.netamt = Set(amounts.net);
    active.taxamt = Set(amounts.tax);
    active.totalamt = Set(amounts.total);
    active.updated_at = Set(Utc::now());
    Ok(active.update(db).await?)
}

/// Recompute the three amount columns of an invoice header from its items.
pub async fn recalc_invoice_totals<C: ConnectionTrait>(
    db: &C,
    inv_id: &str,
) -> Result<InvoiceTotals, ServiceError> {
    let items = invoice_items::Entity::find()
        .filter(invoice_items::Column::InvId.eq(inv_id))
        .all(db)
        .await?;
    let totals = InvoiceTotals::from_items(&items);

    if let Some(header) = invoice_headers::Entity::find_by_id(inv_id.to_string()).one(db).await? {
        let mut active: invoice_headers::ActiveModel = header.into();
        active.totalamt_before = Set(totals.totalamt_before);
        active.taxamt = Set(totals.taxamt);
        active.total_amount = Set(totals.total_amount);
        active.updated_at = Set(Utc::now());
        active.update(db).await?;
    }

    debug!(inv_id, total = %totals.total_amount, "invoice totals recalculated");
    Ok(totals)
}
