//! Procurement Ledger Library
//!
//! Purchase orders, goods receipts and invoices kept consistent inside one
//! transaction per mutation: validation, derived totals, receipt
//! reconciliation, workflow and an append-only audit trail.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod actor;
pub mod config;
pub mod db;
pub mod documents;
pub mod entities;
pub mod errors;
pub mod migrator;
pub mod services;

pub use actor::ActorContext;
pub use documents::{DocumentRow, DocumentType, Mutation, MutationEvent};
pub use errors::ServiceError;
pub use services::procurement::ProcurementService;
pub use services::EnginePolicy;

pub mod prelude {
    pub use crate::actor::*;
    pub use crate::db::*;
    pub use crate::documents::*;
    pub use crate::entities::{ActiveStatus, DocumentStatus, PoItemStatus, PoStatus};
    pub use crate::errors::*;
    pub use crate::services::ledger::MutationOutcome;
    pub use crate::services::procurement::ProcurementService;
    pub use crate::services::reconciliation::{LineMatch, MatchStatus};
    pub use crate::services::EnginePolicy;
}
