//! Procurement ledger services.

// Mutation pipeline
pub mod ledger;
pub mod store;
pub mod validation;

// Derived values
pub mod aggregates;
pub mod pricing;
pub mod reconciliation;

// Workflow, audit and master data
pub mod audit;
pub mod master_data;
pub mod workflow;

// Action surface
pub mod procurement;

use crate::config::AppConfig;

/// Behaviour switches of the engine, taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnginePolicy {
    /// Guard workflow transitions on the source status.
    pub strict_transitions: bool,
    /// Accept receipts beyond the ordered quantity of a PO line.
    pub allow_over_receipt: bool,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            strict_transitions: false,
            allow_over_receipt: true,
        }
    }
}

impl From<&AppConfig> for EnginePolicy {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            strict_transitions: cfg.workflow.strict_transitions,
            allow_over_receipt: cfg.reconciliation.allow_over_receipt,
        }
    }
}
