//! Row writes for each mutation variant.
//!
//! Runs after the validation gate has admitted the mutation and before any
//! recalculation. Deletes read the row first and hand the snapshot back, so
//! recalculation and audit still see the deleted row's keys.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, Set};

use super::{validation, workflow};
use crate::actor::ActorContext;
use crate::documents::{DocumentRow, GrLineKey, InvoiceLineKey, Mutation, PoLineKey};
use crate::entities::{
    gr_headers, gr_items, invoice_headers, invoice_items, materials, po_headers, po_items, vendors,
};
use crate::errors::ServiceError;

fn missing(what: &str) -> ServiceError {
    ServiceError::NotFound(format!("{} not found", what))
}

async fn po_header<C: ConnectionTrait>(db: &C, po_id: &str) -> Result<po_headers::Model, ServiceError> {
    po_headers::Entity::find_by_id(po_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| missing("PO Header"))
}

async fn po_item<C: ConnectionTrait>(db: &C, key: &PoLineKey) -> Result<po_items::Model, ServiceError> {
    po_items::Entity::find_by_id((key.po_id.clone(), key.line_number))
        .one(db)
        .await?
        .ok_or_else(|| missing("PO Item"))
}

async fn gr_header<C: ConnectionTrait>(db: &C, gr_id: &str) -> Result<gr_headers::Model, ServiceError> {
    gr_headers::Entity::find_by_id(gr_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| missing("GR Header"))
}

async fn gr_item<C: ConnectionTrait>(db: &C, key: &GrLineKey) -> Result<gr_items::Model, ServiceError> {
    gr_items::Entity::find_by_id((key.gr_id.clone(), key.line_number))
        .one(db)
        .await?
        .ok_or_else(|| missing("GR Item"))
}

async fn invoice_header<C: ConnectionTrait>(db: &C, inv_id: &str) -> Result<invoice_headers::Model, ServiceError> {
    invoice_headers::Entity::find_by_id(inv_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| missing("Invoice Header"))
}

async fn invoice_item<C: ConnectionTrait>(db: &C, key: &InvoiceLineKey) -> Result<invoice_items::Model, ServiceError> {
    invoice_items::Entity::find_by_id((key.inv_id.clone(), key.line_number))
        .one(db)
        .await?
        .ok_or_else(|| missing("Invoice item"))
}

async fn vendor<C: ConnectionTrait>(db: &C, vm_id: &str) -> Result<vendors::Model, ServiceError> {
    vendors::Entity::find_by_id(vm_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| missing("Vendor"))
}

async fn material<C: ConnectionTrait>(db: &C, mm_id: &str) -> Result<materials::Model, ServiceError> {
    materials::Entity::find_by_id(mm_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| missing("Material"))
}

/// Apply the row-level write of an admitted mutation.
///
/// Returns the written row, or the snapshot taken before a delete.
pub async fn write<C: ConnectionTrait>(
    db: &C,
    mutation: Mutation,
    actor: &ActorContext,
    now: DateTime<Utc>,
) -> Result<DocumentRow, ServiceError> {
    let row = match mutation {
        Mutation::CreatePoHeader(input) => {
            DocumentRow::PoHeader(validation::stamp_po_header(&input, now).insert(db).await?)
        }
        Mutation::UpdatePoHeader { po_id, changes } => {
            let mut active: po_headers::ActiveModel = po_header(db, &po_id).await?.into();
            if let Some(vendor_id) = changes.vendor_id {
                active.vendor_id = Set(Some(vendor_id));
            }
            if let Some(doc_date) = changes.doc_date {
                active.doc_date = Set(doc_date);
            }
            if let Some(remarks) = changes.remarks {
                active.remarks = Set(Some(remarks));
            }
            active.updated_at = Set(now);
            DocumentRow::PoHeader(active.update(db).await?)
        }
        Mutation::DeletePoHeader { po_id } => {
            let snapshot = po_header(db, &po_id).await?;
            snapshot.clone().delete(db).await?;
            DocumentRow::PoHeader(snapshot)
        }

        Mutation::CreatePoItem(input) => {
            DocumentRow::PoItem(validation::stamp_po_item(&input, now).insert(db).await?)
        }
        Mutation::UpdatePoItem { key, changes } => {
            let mut active: po_items::ActiveModel = po_item(db, &key).await?.into();
            if let Some(material_id) = changes.material_id {
                active.material_id = Set(Some(material_id));
            }
            if let Some(qty) = changes.ordered_qty {
                active.ordered_qty = Set(qty);
            }
            if let Some(price) = changes.net_price {
                active.net_price = Set(price);
            }
            if let Some(discount) = changes.discount_pct {
                active.discount_pct = Set(discount);
            }
            if let Some(gst) = changes.gst_pct {
                active.gst_pct = Set(gst);
            }
            active.updated_at = Set(now);
            DocumentRow::PoItem(active.update(db).await?)
        }
        Mutation::DeletePoItem(key) => {
            let snapshot = po_item(db, &key).await?;
            snapshot.clone().delete(db).await?;
            DocumentRow::PoItem(snapshot)
        }

        Mutation::CreateGrHeader(input) => {
            DocumentRow::GrHeader(validation::stamp_gr_header(&input, now).insert(db).await?)
        }
        Mutation::UpdateGrHeader { gr_id, changes } => {
            let mut active: gr_headers::ActiveModel = gr_header(db, &gr_id).await?.into();
            if let Some(gr_date) = changes.gr_date {
                active.gr_date = Set(gr_date);
            }
            if let Some(status) = changes.status {
                active.status = Set(status);
            }
            if let Some(remarks) = changes.remarks {
                active.remarks = Set(Some(remarks));
            }
            active.updated_at = Set(now);
            DocumentRow::GrHeader(active.update(db).await?)
        }
        Mutation::DeleteGrHeader { gr_id } => {
            let snapshot = gr_header(db, &gr_id).await?;
            snapshot.clone().delete(db).await?;
            DocumentRow::GrHeader(snapshot)
        }

        Mutation::CreateGrItem(input) => {
            DocumentRow::GrItem(validation::stamp_gr_item(&input, now).insert(db).await?)
        }
        Mutation::UpdateGrItem { key, changes } => {
            let mut active: gr_items::ActiveModel = gr_item(db, &key).await?.into();
            if let Some(qty) = changes.received_qty {
                active.received_qty = Set(qty);
            }
            active.updated_at = Set(now);
            DocumentRow::GrItem(active.update(db).await?)
        }
        Mutation::DeleteGrItem(key) => {
            let snapshot = gr_item(db, &key).await?;
            snapshot.clone().delete(db).await?;
            DocumentRow::GrItem(snapshot)
        }

        Mutation::CreateInvoiceHeader(input) => {
            DocumentRow::InvoiceHeader(validation::stamp_invoice_header(&input, now).insert(db).await?)
        }
        Mutation::UpdateInvoiceHeader { inv_id, changes } => {
            let mut active: invoice_headers::ActiveModel = invoice_header(db, &inv_id).await?.into();
            if let Some(number) = changes.invoice_number {
                active.invoice_number = Set(Some(number));
            }
            if let Some(po_id) = changes.po_id {
                active.po_id = Set(Some(po_id));
            }
            if let Some(inv_date) = changes.inv_date {
                active.inv_date = Set(inv_date);
            }
            if let Some(status) = changes.status {
                active.status = Set(status);
            }
            active.updated_at = Set(now);
            DocumentRow::InvoiceHeader(active.update(db).await?)
        }
        Mutation::DeleteInvoiceHeader { inv_id } => {
            let snapshot = invoice_header(db, &inv_id).await?;
            snapshot.clone().delete(db).await?;
            DocumentRow::InvoiceHeader(snapshot)
        }

        Mutation::CreateInvoiceItem(input) => {
            DocumentRow::InvoiceItem(validation::stamp_invoice_item(&input, now).insert(db).await?)
        }
        Mutation::UpdateInvoiceItem { key, changes } => {
            let mut active: invoice_items::ActiveModel = invoice_item(db, &key).await?.into();
            if let Some(qty) = changes.invoiced_qty {
                active.invoiced_qty = Set(qty);
            }
            if let Some(price) = changes.net_price {
                active.net_price = Set(price);
            }
            if let Some(discount) = changes.discount_pct {
                active.discount_pct = Set(discount);
            }
            if let Some(gst) = changes.gst_pct {
                active.gst_pct = Set(gst);
            }
            active.updated_at = Set(now);
            DocumentRow::InvoiceItem(active.update(db).await?)
        }
        Mutation::DeleteInvoiceItem(key) => {
            let snapshot = invoice_item(db, &key).await?;
            snapshot.clone().delete(db).await?;
            DocumentRow::InvoiceItem(snapshot)
        }

        Mutation::CreateVendor(input) => {
            DocumentRow::Vendor(validation::stamp_vendor(&input, now).insert(db).await?)
        }
        Mutation::UpdateVendor { vm_id, changes } => {
            let mut active: vendors::ActiveModel = vendor(db, &vm_id).await?.into();
            if let Some(code) = changes.code {
                active.code = Set(code);
            }
            if let Some(name) = changes.name {
                active.name = Set(Some(name));
            }
            if let Some(gst_no) = changes.gst_no {
                active.gst_no = Set(gst_no);
            }
            active.updated_at = Set(now);
            DocumentRow::Vendor(active.update(db).await?)
        }
        Mutation::DeleteVendor { vm_id } => {
            let snapshot = vendor(db, &vm_id).await?;
            snapshot.clone().delete(db).await?;
            DocumentRow::Vendor(snapshot)
        }

        Mutation::CreateMaterial(input) => {
            DocumentRow::Material(validation::stamp_material(&input, now).insert(db).await?)
        }
        Mutation::UpdateMaterial { mm_id, changes } => {
            let mut active: materials::ActiveModel = material(db, &mm_id).await?.into();
            if let Some(code) = changes.code {
                active.code = Set(code);
            }
            if let Some(description) = changes.description {
                active.description = Set(Some(description));
            }
            if let Some(gst_no) = changes.gst_no {
                active.gst_no = Set(gst_no);
            }
            if let Some(price) = changes.std_price {
                active.std_price = Set(price);
            }
            active.updated_at = Set(now);
            DocumentRow::Material(active.update(db).await?)
        }
        Mutation::DeleteMaterial { mm_id } => {
            let snapshot = material(db, &mm_id).await?;
            snapshot.clone().delete(db).await?;
            DocumentRow::Material(snapshot)
        }

        Mutation::TransitionPo { po_id, transition } => {
            let header = po_header(db, &po_id).await?;
            DocumentRow::PoHeader(workflow::apply_transition(db, header, &transition, actor, now).await?)
        }
        Mutation::SetVendorActivation { vm_id, status } => {
            let mut active: vendors::ActiveModel = vendor(db, &vm_id).await?.into();
            active.is_active = Set(status);
            active.updated_at = Set(now);
            DocumentRow::Vendor(active.update(db).await?)
        }
        Mutation::SetMaterialActivation { mm_id, status } => {
            let mut active: materials::ActiveModel = material(db, &mm_id).await?.into();
            active.is_active = Set(status);
            active.updated_at = Set(now);
            DocumentRow::Material(active.update(db).await?)
        }
    };
    Ok(row)
}
