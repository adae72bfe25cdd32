use serde::{Deserialize, Serialize};

use super::inputs::*;
use super::{DocumentType, MutationEvent};
use crate::entities::{ActiveStatus, PoStatus};

/// Purchase order workflow transitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PoTransition {
    Submit,
    Approve,
    Reject { reason: String },
    Close,
}

impl PoTransition {
    /// Status the header ends up in.
    pub fn target_status(&self) -> PoStatus {
        match self {
            PoTransition::Submit => PoStatus::Submitted,
            PoTransition::Approve => PoStatus::Approved,
            PoTransition::Reject { .. } => PoStatus::Rejected,
            PoTransition::Close => PoStatus::Closed,
        }
    }

    /// Status the header must be in when strict transitions are enforced.
    pub fn required_source(&self) -> PoStatus {
        match self {
            PoTransition::Submit => PoStatus::Draft,
            PoTransition::Approve | PoTransition::Reject { .. } => PoStatus::Submitted,
            PoTransition::Close => PoStatus::Approved,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PoTransition::Submit => "submit",
            PoTransition::Approve => "approve",
            PoTransition::Reject { .. } => "reject",
            PoTransition::Close => "close",
        }
    }
}

/// A single change to a tracked document.
///
/// Workflow transitions and master data activation are updates of the row
/// they touch and are audited as such.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    CreatePoHeader(NewPoHeader),
    UpdatePoHeader { po_id: String, changes: PoHeaderChanges },
    DeletePoHeader { po_id: String },

    CreatePoItem(NewPoItem),
    UpdatePoItem { key: PoLineKey, changes: PoItemChanges },
    DeletePoItem(PoLineKey),

    CreateGrHeader(NewGrHeader),
    UpdateGrHeader { gr_id: String, changes: GrHeaderChanges },
    DeleteGrHeader { gr_id: String },

    CreateGrItem(NewGrItem),
    UpdateGrItem { key: GrLineKey, changes: GrItemChanges },
    DeleteGrItem(GrLineKey),

    CreateInvoiceHeader(NewInvoiceHeader),
    UpdateInvoiceHeader { inv_id: String, changes: InvoiceHeaderChanges },
    DeleteInvoiceHeader { inv_id: String },

    CreateInvoiceItem(NewInvoiceItem),
    UpdateInvoiceItem { key: InvoiceLineKey, changes: InvoiceItemChanges },
    DeleteInvoiceItem(InvoiceLineKey),

    CreateVendor(NewVendor),
    UpdateVendor { vm_id: String, changes: VendorChanges },
    DeleteVendor { vm_id: String },

    CreateMaterial(NewMaterial),
    UpdateMaterial { mm_id: String, changes: MaterialChanges },
    DeleteMaterial { mm_id: String },

    TransitionPo { po_id: String, transition: PoTransition },
    SetVendorActivation { vm_id: String, status: ActiveStatus },
    SetMaterialActivation { mm_id: String, status: ActiveStatus },
}

impl Mutation {
    pub fn document_type(&self) -> DocumentType {
        use Mutation::*;
        match self {
            CreatePoHeader(_) | UpdatePoHeader { .. } | DeletePoHeader { .. } | TransitionPo { .. } => {
                DocumentType::PoHeader
            }
            CreatePoItem(_) | UpdatePoItem { .. } | DeletePoItem(_) => DocumentType::PoItem,
            CreateGrHeader(_) | UpdateGrHeader { .. } | DeleteGrHeader { .. } => DocumentType::GrHeader,
            CreateGrItem(_) | UpdateGrItem { .. } | DeleteGrItem(_) => DocumentType::GrItem,
            CreateInvoiceHeader(_) | UpdateInvoiceHeader { .. } | DeleteInvoiceHeader { .. } => {
                DocumentType::InvoiceHeader
            }
            CreateInvoiceItem(_) | UpdateInvoiceItem { .. } | DeleteInvoiceItem(_) => {
                DocumentType::InvoiceItem
            }
            CreateVendor(_) | UpdateVendor { .. } | DeleteVendor { .. } | SetVendorActivation { .. } => {
                DocumentType::Vendor
            }
            CreateMaterial(_)
            | UpdateMaterial { .. }
            | DeleteMaterial { .. }
            | SetMaterialActivation { .. } => DocumentType::Material,
        }
    }

    pub fn event(&self) -> MutationEvent {
        use Mutation::*;
        match self {
            CreatePoHeader(_) | CreatePoItem(_) | CreateGrHeader(_) | CreateGrItem(_)
            | CreateInvoiceHeader(_) | CreateInvoiceItem(_) | CreateVendor(_) | CreateMaterial(_) => {
                MutationEvent::Create
            }
            DeletePoHeader { .. } | DeletePoItem(_) | DeleteGrHeader { .. } | DeleteGrItem(_)
            | DeleteInvoiceHeader { .. } | DeleteInvoiceItem(_) | DeleteVendor { .. }
            | DeleteMaterial { .. } => MutationEvent::Delete,
            UpdatePoHeader { .. } | UpdatePoItem { .. } | UpdateGrHeader { .. } | UpdateGrItem { .. }
            | UpdateInvoiceHeader { .. } | UpdateInvoiceItem { .. } | UpdateVendor { .. }
            | UpdateMaterial { .. } | TransitionPo { .. } | SetVendorActivation { .. }
            | SetMaterialActivation { .. } => MutationEvent::Update,
        }
    }

    /// `DocumentType_EVENT`, the label stamped on the audit record.
    pub fn status_label(&self) -> String {
        format!("{}_{}", self.document_type(), self.event())
    }
}
