//! Closed set of tracked document types and the mutations accepted for them.
//!
//! Every mutation is a [`Mutation`] variant; its [`DocumentType`] decides how
//! derived values are recalculated ([`RecalcStrategy`]) and how the audit
//! trail labels it.

mod inputs;
mod mutation;

pub use inputs::*;
pub use mutation::{Mutation, PoTransition};

use serde::{Deserialize, Serialize};

use crate::entities::{
    gr_headers, gr_items, invoice_headers, invoice_items, materials, po_headers, po_items,
    vendors,
};

/// Tracked entity types. The display form is the entity-set name used in
/// audit status labels (`POItems_CREATE`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
pub enum DocumentType {
    #[strum(serialize = "POHeaders")]
    PoHeader,
    #[strum(serialize = "POItems")]
    PoItem,
    #[strum(serialize = "GRHeaders")]
    GrHeader,
    #[strum(serialize = "GRItems")]
    GrItem,
    #[strum(serialize = "InvoiceHeaders")]
    InvoiceHeader,
    #[strum(serialize = "InvoiceItems")]
    InvoiceItem,
    #[strum(serialize = "Vendors")]
    Vendor,
    #[strum(serialize = "Materials")]
    Material,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// How derived values are refreshed after a mutation of this type.
    pub fn recalc_strategy(&self) -> RecalcStrategy {
        match self {
            DocumentType::PoItem => RecalcStrategy::PurchaseOrderLine,
            DocumentType::GrItem => RecalcStrategy::GoodsReceiptLine,
            DocumentType::InvoiceItem => RecalcStrategy::InvoiceLine,
            DocumentType::PoHeader
            | DocumentType::GrHeader
            | DocumentType::InvoiceHeader
            | DocumentType::Vendor
            | DocumentType::Material => RecalcStrategy::None,
        }
    }
}

/// Kind of change applied to a row.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum MutationEvent {
    Create,
    Update,
    Delete,
}

impl MutationEvent {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Post-write recalculation applied to a mutated row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecalcStrategy {
    /// Nothing derived depends on the row.
    None,
    /// Item amounts and receipt state, then the PO header total.
    PurchaseOrderLine,
    /// Receipt state of the referenced PO line, then its PO header total.
    GoodsReceiptLine,
    /// Item amounts, then the invoice header totals.
    InvoiceLine,
}

/// A row as it stands after a mutation, or the pre-delete snapshot of a
/// deleted row.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "document", content = "row")]
pub enum DocumentRow {
    PoHeader(po_headers::Model),
    PoItem(po_items::Model),
    GrHeader(gr_headers::Model),
    GrItem(gr_items::Model),
    InvoiceHeader(invoice_headers::Model),
    InvoiceItem(invoice_items::Model),
    Vendor(vendors::Model),
    Material(materials::Model),
}

impl DocumentRow {
    pub fn document_type(&self) -> DocumentType {
        match self {
            DocumentRow::PoHeader(_) => DocumentType::PoHeader,
            DocumentRow::PoItem(_) => DocumentType::PoItem,
            DocumentRow::GrHeader(_) => DocumentType::GrHeader,
            DocumentRow::GrItem(_) => DocumentType::GrItem,
            DocumentRow::InvoiceHeader(_) => DocumentType::InvoiceHeader,
            DocumentRow::InvoiceItem(_) => DocumentType::InvoiceItem,
            DocumentRow::Vendor(_) => DocumentType::Vendor,
            DocumentRow::Material(_) => DocumentType::Material,
        }
    }

    /// Natural id of the business document the row belongs to.
    ///
    /// Purchase order rows and goods receipt lines resolve to their PO id,
    /// invoice rows to their invoice id. Rows that belong to neither
    /// (goods receipt headers, master data) fall back to their own key.
    pub fn target_document_id(&self) -> String {
        match self {
            DocumentRow::PoHeader(row) => row.po_id.clone(),
            DocumentRow::PoItem(row) => row.po_id.clone(),
            DocumentRow::GrItem(row) => row.po_id.clone(),
            DocumentRow::GrHeader(row) => row.gr_id.clone(),
            DocumentRow::InvoiceHeader(row) => row.inv_id.clone(),
            DocumentRow::InvoiceItem(row) => row.inv_id.clone(),
            DocumentRow::Vendor(row) => row.vm_id.clone(),
            DocumentRow::Material(row) => row.mm_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_use_entity_set_names() {
        assert_eq!(DocumentType::PoHeader.to_string(), "POHeaders");
        assert_eq!(DocumentType::GrItem.as_str(), "GRItems");
        assert_eq!(DocumentType::InvoiceItem.as_str(), "InvoiceItems");
        assert_eq!(MutationEvent::Create.to_string(), "CREATE");
        assert_eq!(MutationEvent::Delete.as_str(), "DELETE");
    }

    #[test]
    fn only_line_types_trigger_recalculation() {
        for document_type in DocumentType::iter() {
            let strategy = document_type.recalc_strategy();
            match document_type {
                DocumentType::PoItem => assert_eq!(strategy, RecalcStrategy::PurchaseOrderLine),
                DocumentType::GrItem => assert_eq!(strategy, RecalcStrategy::GoodsReceiptLine),
                DocumentType::InvoiceItem => assert_eq!(strategy, RecalcStrategy::InvoiceLine),
                _ => assert_eq!(strategy, RecalcStrategy::None),
            }
        }
    }
}
