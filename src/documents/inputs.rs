//! Payloads carried by [`super::Mutation`] variants.
//!
//! Create payloads hold the caller-supplied fields only; derived values,
//! statuses and timestamps are stamped by the engine. Change payloads are
//! sparse: `None` leaves the stored value untouched.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::DocumentStatus;

/// Composite key of a purchase order line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoLineKey {
    pub po_id: String,
    pub line_number: i32,
}

impl PoLineKey {
    pub fn new(po_id: impl Into<String>, line_number: i32) -> Self {
        Self {
            po_id: po_id.into(),
            line_number,
        }
    }
}

/// Composite key of a goods receipt line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrLineKey {
    pub gr_id: String,
    pub line_number: i32,
}

impl GrLineKey {
    pub fn new(gr_id: impl Into<String>, line_number: i32) -> Self {
        Self {
            gr_id: gr_id.into(),
            line_number,
        }
    }
}

/// Composite key of an invoice line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceLineKey {
    pub inv_id: String,
    pub line_number: i32,
}

impl InvoiceLineKey {
    pub fn new(inv_id: impl Into<String>, line_number: i32) -> Self {
        Self {
            inv_id: inv_id.into(),
            line_number,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPoHeader {
    pub po_id: String,
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoHeaderChanges {
    pub vendor_id: Option<String>,
    pub doc_date: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPoItem {
    pub po_id: String,
    pub line_number: i32,
    #[serde(default)]
    pub material_id: Option<String>,
    pub ordered_qty: Decimal,
    pub net_price: Decimal,
    #[serde(default)]
    pub discount_pct: Decimal,
    #[serde(default)]
    pub gst_pct: Decimal,
}

impl NewPoItem {
    pub fn key(&self) -> PoLineKey {
        PoLineKey::new(self.po_id.clone(), self.line_number)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoItemChanges {
    pub material_id: Option<String>,
    pub ordered_qty: Option<Decimal>,
    pub net_price: Option<Decimal>,
    pub discount_pct: Option<Decimal>,
    pub gst_pct: Option<Decimal>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewGrHeader {
    pub gr_id: String,
    #[serde(default)]
    pub gr_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub remarks: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GrHeaderChanges {
    pub gr_date: Option<DateTime<Utc>>,
    pub status: Option<DocumentStatus>,
    pub remarks: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewGrItem {
    pub gr_id: String,
    pub line_number: i32,
    pub po_id: String,
    pub po_line_number: i32,
    pub received_qty: Decimal,
}

impl NewGrItem {
    pub fn key(&self) -> GrLineKey {
        GrLineKey::new(self.gr_id.clone(), self.line_number)
    }

    pub fn po_line(&self) -> PoLineKey {
        PoLineKey::new(self.po_id.clone(), self.po_line_number)
    }
}

/// Only the received quantity of a goods receipt line can change; the PO
/// line it reconciles against is fixed at creation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GrItemChanges {
    pub received_qty: Option<Decimal>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewInvoiceHeader {
    pub inv_id: String,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub po_id: Option<String>,
    #[serde(default)]
    pub inv_date: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceHeaderChanges {
    pub invoice_number: Option<String>,
    pub po_id: Option<String>,
    pub inv_date: Option<DateTime<Utc>>,
    pub status: Option<DocumentStatus>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewInvoiceItem {
    pub inv_id: String,
    pub line_number: i32,
    #[serde(default)]
    pub po_id: Option<String>,
    #[serde(default)]
    pub po_line_number: Option<i32>,
    pub invoiced_qty: Decimal,
    pub net_price: Decimal,
    #[serde(default)]
    pub discount_pct: Decimal,
    #[serde(default)]
    pub gst_pct: Decimal,
}

impl NewInvoiceItem {
    pub fn key(&self) -> InvoiceLineKey {
        InvoiceLineKey::new(self.inv_id.clone(), self.line_number)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItemChanges {
    pub invoiced_qty: Option<Decimal>,
    pub net_price: Option<Decimal>,
    pub discount_pct: Option<Decimal>,
    pub gst_pct: Option<Decimal>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewVendor {
    pub vm_id: String,
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub gst_no: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorChanges {
    pub code: Option<String>,
    pub name: Option<String>,
    pub gst_no: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMaterial {
    pub mm_id: String,
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub gst_no: Option<String>,
    #[serde(default)]
    pub std_price: Option<Decimal>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialChanges {
    pub code: Option<String>,
    pub description: Option<String>,
    pub gst_no: Option<String>,
    pub std_price: Option<Decimal>,
}
