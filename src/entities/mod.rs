//! Ledger store entities: one table per procurement document, line type and
//! master data record, plus the append-only audit trail.

pub mod audit_records;
pub mod document_status;
pub mod gr_headers;
pub mod gr_items;
pub mod invoice_headers;
pub mod invoice_items;
pub mod materials;
pub mod po_headers;
pub mod po_items;
pub mod vendors;

pub use document_status::{ActiveStatus, DocumentStatus};
pub use po_headers::PoStatus;
pub use po_items::PoItemStatus;
