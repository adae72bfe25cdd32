//! Validation gate evaluated before any mutation reaches storage.
//!
//! The gate only reads. Rejections carry the status the caller sees
//! (`ValidationError` 400, `NotFound` 404, `ReferentialIntegrity` 400,
//! `Conflict` 409, `InvalidOperation` 400). Create-time defaults are stamped
//! by the `stamp_*` builders once a create has been admitted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use tracing::debug;

use super::reconciliation;
use super::workflow;
use super::EnginePolicy;
use crate::documents::{
    GrItemChanges, GrLineKey, InvoiceItemChanges, InvoiceLineKey, MaterialChanges, Mutation, NewGrHeader, NewGrItem,
    NewInvoiceHeader, NewInvoiceItem, NewMaterial, NewPoHeader, NewPoItem, NewVendor, PoItemChanges,
    PoLineKey, VendorChanges,
};
use crate::entities::{
    gr_headers, gr_items, invoice_headers, invoice_items, materials, po_headers, po_items, vendors,
    ActiveStatus, DocumentStatus, PoItemStatus, PoStatus,
};
use crate::errors::ServiceError;

const CLOSED_PO: &str = "Closed PO cannot be modified";

#[derive(Debug, Clone, Default)]
pub struct ValidationGate {
    policy: EnginePolicy,
}

impl ValidationGate {
    pub fn new(policy: EnginePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &EnginePolicy {
        &self.policy
    }

    /// Accept or reject a mutation against the current state of `db`.
    pub async fn check<C: ConnectionTrait>(&self, db: &C, mutation: &Mutation) -> Result<(), ServiceError> {
        let result = self.evaluate(db, mutation).await;
        if let Err(err) = &result {
            debug!(label = %mutation.status_label(), reason = %err, "mutation rejected by validation gate");
        }
        result
    }

    async fn evaluate<C: ConnectionTrait>(&self, db: &C, mutation: &Mutation) -> Result<(), ServiceError> {
        match mutation {
            Mutation::CreatePoHeader(input) => self.check_create_po_header(db, input).await,
            Mutation::UpdatePoHeader { po_id, changes } => {
                let header = require_po_header(db, po_id).await?;
                ensure_po_open(&header)?;
                if let Some(vendor_id) = &changes.vendor_id {
                    ensure_vendor_exists(db, vendor_id).await?;
                }
                Ok(())
            }
            Mutation::DeletePoHeader { po_id } => {
                let header = require_po_header(db, po_id).await?;
                ensure_po_open(&header)?;
                let items = po_items::Entity::find()
                    .filter(po_items::Column::PoId.eq(po_id.as_str()))
                    .count(db)
                    .await?;
                ensure_no_items("PO", po_id, items)
            }

            Mutation::CreatePoItem(input) => self.check_create_po_item(db, input).await,
            Mutation::UpdatePoItem { key, changes } => self.check_update_po_item(db, key, changes).await,
            Mutation::DeletePoItem(key) => {
                require_po_item(db, key).await?;
                ensure_po_open_if_present(db, &key.po_id).await
            }

            Mutation::CreateGrHeader(input) => check_create_gr_header(db, input).await,
            Mutation::UpdateGrHeader { gr_id, .. } => require_gr_header(db, gr_id).await.map(|_| ()),
            Mutation::DeleteGrHeader { gr_id } => {
                require_gr_header(db, gr_id).await?;
                let items = gr_items::Entity::find()
                    .filter(gr_items::Column::GrId.eq(gr_id.as_str()))
                    .count(db)
                    .await?;
                ensure_no_items("GR", gr_id, items)
            }

            Mutation::CreateGrItem(input) => self.check_create_gr_item(db, input).await,
            Mutation::UpdateGrItem { key, changes } => self.check_update_gr_item(db, key, changes).await,
            Mutation::DeleteGrItem(key) => {
                let item = require_gr_item(db, key).await?;
                ensure_po_open_if_present(db, &item.po_id).await
            }

            Mutation::CreateInvoiceHeader(input) => check_create_invoice_header(db, input).await,
            Mutation::UpdateInvoiceHeader { inv_id, .. } => {
                require_invoice_header(db, inv_id).await.map(|_| ())
            }
            Mutation::DeleteInvoiceHeader { inv_id } => {
                require_invoice_header(db, inv_id).await?;
                let items = invoice_items::Entity::find()
                    .filter(invoice_items::Column::InvId.eq(inv_id.as_str()))
                    .count(db)
                    .await?;
                ensure_no_items("Invoice", inv_id, items)
            }

            Mutation::CreateInvoiceItem(input) => check_create_invoice_item(db, input).await,
            Mutation::UpdateInvoiceItem { key, changes } => {
                require_invoice_item(db, key).await?;
                check_invoice_item_changes(changes)
            }
            Mutation::DeleteInvoiceItem(key) => require_invoice_item(db, key).await.map(|_| ()),

            Mutation::CreateVendor(input) => check_create_vendor(db, input).await,
            Mutation::UpdateVendor { vm_id, changes } => check_update_vendor(db, vm_id, changes).await,
            Mutation::DeleteVendor { vm_id } => {
                require_vendor(db, vm_id).await?;
                let used = po_headers::Entity::find()
                    .filter(po_headers::Column::VendorId.eq(vm_id.as_str()))
                    .count(db)
                    .await?;
                if used > 0 {
                    return Err(ServiceError::ReferentialIntegrity(
                        "Vendor is used in PO and cannot be deleted".to_string(),
                    ));
                }
                Ok(())
            }

            Mutation::CreateMaterial(input) => check_create_material(db, input).await,
            Mutation::UpdateMaterial { mm_id, changes } => check_update_material(db, mm_id, changes).await,
            Mutation::DeleteMaterial { mm_id } => {
                require_material(db, mm_id).await?;
                let used = po_items::Entity::find()
                    .filter(po_items::Column::MaterialId.eq(mm_id.as_str()))
                    .count(db)
                    .await?;
                if used > 0 {
                    return Err(ServiceError::ReferentialIntegrity(
                        "Material is used in PO and cannot be deleted".to_string(),
                    ));
                }
                Ok(())
            }

            Mutation::TransitionPo { po_id, transition } => {
                let header = require_po_header(db, po_id).await?;
                workflow::check_transition(header.status, transition, self.policy.strict_transitions)
            }
            Mutation::SetVendorActivation { vm_id, .. } => require_vendor(db, vm_id).await.map(|_| ()),
            Mutation::SetMaterialActivation { mm_id, .. } => {
                require_material(db, mm_id).await.map(|_| ())
            }
        }
    }

    async fn check_create_po_header<C: ConnectionTrait>(
        &self,
        db: &C,
        input: &NewPoHeader,
    ) -> Result<(), ServiceError> {
        require_id("PO", &input.po_id)?;
        if let Some(existing) = po_headers::Entity::find_by_id(input.po_id.clone()).one(db).await? {
            ensure_po_open(&existing)?;
            return Err(ServiceError::Conflict(format!(
                "PO Header {} already exists",
                input.po_id
            )));
        }
        if let Some(vendor_id) = &input.vendor_id {
            ensure_vendor_exists(db, vendor_id).await?;
        }
        Ok(())
    }

    async fn check_create_po_item<C: ConnectionTrait>(&self, db: &C, input: &NewPoItem) -> Result<(), ServiceError> {
        let header = require_po_header(db, &input.po_id).await?;
        ensure_po_open(&header)?;
        check_ordered_qty(input.ordered_qty)?;
        check_net_price(input.net_price)?;
        check_percentages(input.discount_pct, input.gst_pct)?;
        if po_items::Entity::find_by_id((input.po_id.clone(), input.line_number))
            .one(db)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(format!(
                "PO {} line {} already exists",
                input.po_id, input.line_number
            )));
        }
        if let Some(material_id) = &input.material_id {
            ensure_material_exists(db, material_id).await?;
        }
        Ok(())
    }

    async fn check_update_po_item<C: ConnectionTrait>(
        &self,
        db: &C,
        key: &PoLineKey,
        changes: &PoItemChanges,
    ) -> Result<(), ServiceError> {
        require_po_item(db, key).await?;
        ensure_po_open_if_present(db, &key.po_id).await?;
        if let Some(qty) = changes.ordered_qty {
            check_ordered_qty(qty)?;
        }
        if let Some(price) = changes.net_price {
            check_net_price(price)?;
        }
        if let Some(discount) = changes.discount_pct {
            check_discount_pct(discount)?;
        }
        if let Some(gst) = changes.gst_pct {
            check_gst_pct(gst)?;
        }
        if let Some(material_id) = &changes.material_id {
            ensure_material_exists(db, material_id).await?;
        }
        Ok(())
    }

    async fn check_create_gr_item<C: ConnectionTrait>(&self, db: &C, input: &NewGrItem) -> Result<(), ServiceError> {
        check_received_on_create(input.received_qty)?;
        require_gr_header(db, &input.gr_id).await?;
        if gr_items::Entity::find_by_id((input.gr_id.clone(), input.line_number))
            .one(db)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(format!(
                "GR {} line {} already exists",
                input.gr_id, input.line_number
            )));
        }
        ensure_po_open_if_present(db, &input.po_id).await?;
        self.check_over_receipt(db, &input.po_line(), None, input.received_qty)
            .await
    }

    async fn check_update_gr_item<C: ConnectionTrait>(
        &self,
        db: &C,
        key: &GrLineKey,
        changes: &GrItemChanges,
    ) -> Result<(), ServiceError> {
        let item = require_gr_item(db, key).await?;
        ensure_po_open_if_present(db, &item.po_id).await?;
        if let Some(qty) = changes.received_qty {
            check_received_on_update(qty)?;
            let line = PoLineKey::new(item.po_id.clone(), item.po_line_number);
            self.check_over_receipt(db, &line, Some(key), qty).await?;
        }
        Ok(())
    }

    async fn check_over_receipt<C: ConnectionTrait>(
        &self,
        db: &C,
        line: &PoLineKey,
        exclude: Option<&GrLineKey>,
        qty: Decimal,
    ) -> Result<(), ServiceError> {
        if self.policy.allow_over_receipt {
            return Ok(());
        }
        let Some(item) = po_items::Entity::find_by_id((line.po_id.clone(), line.line_number))
            .one(db)
            .await?
        else {
            return Ok(());
        };
        let received = reconciliation::received_quantity_excluding(db, line, exclude).await? + qty;
        if received > item.ordered_qty {
            return Err(ServiceError::ValidationError(format!(
                "Received quantity {} exceeds ordered quantity {} for PO {} line {}",
                received, item.ordered_qty, line.po_id, line.line_number
            )));
        }
        Ok(())
    }
}

async fn check_create_gr_header<C: ConnectionTrait>(db: &C, input: &NewGrHeader) -> Result<(), ServiceError> {
    require_id("GR", &input.gr_id)?;
    if gr_headers::Entity::find_by_id(input.gr_id.clone()).one(db).await?.is_some() {
        return Err(ServiceError::Conflict(format!("GR Header {} already exists", input.gr_id)));
    }
    Ok(())
}

async fn check_create_invoice_header<C: ConnectionTrait>(
    db: &C,
    input: &NewInvoiceHeader,
) -> Result<(), ServiceError> {
    require_id("Invoice", &input.inv_id)?;
    if invoice_headers::Entity::find_by_id(input.inv_id.clone())
        .one(db)
        .await?
        .is_some()
    {
        return Err(ServiceError::Conflict(format!(
            "Invoice Header {} already exists",
            input.inv_id
        )));
    }
    Ok(())
}

async fn check_create_invoice_item<C: ConnectionTrait>(db: &C, input: &NewInvoiceItem) -> Result<(), ServiceError> {
    check_invoiced_on_create(input.invoiced_qty)?;
    check_net_price(input.net_price)?;
    check_percentages(input.discount_pct, input.gst_pct)?;
    require_invoice_header(db, &input.inv_id).await?;
    if invoice_items::Entity::find_by_id((input.inv_id.clone(), input.line_number))
        .one(db)
        .await?
        .is_some()
    {
        return Err(ServiceError::Conflict(format!(
            "Invoice {} line {} already exists",
            input.inv_id, input.line_number
        )));
    }
    Ok(())
}

fn check_invoice_item_changes(changes: &InvoiceItemChanges) -> Result<(), ServiceError> {
    if let Some(qty) = changes.invoiced_qty {
        check_invoiced_on_update(qty)?;
    }
    if let Some(price) = changes.net_price {
        check_net_price(price)?;
    }
    if let Some(discount) = changes.discount_pct {
        check_discount_pct(discount)?;
    }
    if let Some(gst) = changes.gst_pct {
        check_gst_pct(gst)?;
    }
    Ok(())
}

async fn check_create_vendor<C: ConnectionTrait>(db: &C, input: &NewVendor) -> Result<(), ServiceError> {
    require_id("Vendor", &input.vm_id)?;
    let code = check_mandatory_codes("Vendor", input.code.as_deref(), input.gst_no.as_deref())?;
    if vendors::Entity::find_by_id(input.vm_id.clone()).one(db).await?.is_some() {
        return Err(ServiceError::Conflict(format!("Vendor {} already exists", input.vm_id)));
    }
    ensure_vendor_code_free(db, code, None).await
}

async fn check_update_vendor<C: ConnectionTrait>(
    db: &C,
    vm_id: &str,
    changes: &VendorChanges,
) -> Result<(), ServiceError> {
    require_vendor(db, vm_id).await?;
    if let Some(code) = &changes.code {
        if is_blank(code) {
            return Err(ServiceError::ValidationError("Vendor Code cannot be empty".to_string()));
        }
        ensure_vendor_code_free(db, code, Some(vm_id)).await?;
    }
    Ok(())
}

async fn check_create_material<C: ConnectionTrait>(db: &C, input: &NewMaterial) -> Result<(), ServiceError> {
    require_id("Material", &input.mm_id)?;
    let code = check_mandatory_codes("Material", input.code.as_deref(), input.gst_no.as_deref())?;
    if let Some(price) = input.std_price {
        check_std_price(price)?;
    }
    if materials::Entity::find_by_id(input.mm_id.clone()).one(db).await?.is_some() {
        return Err(ServiceError::Conflict(format!("Material {} already exists", input.mm_id)));
    }
    ensure_material_code_free(db, code, None).await
}

async fn check_update_material<C: ConnectionTrait>(
    db: &C,
    mm_id: &str,
    changes: &MaterialChanges,
) -> Result<(), ServiceError> {
    require_material(db, mm_id).await?;
    if let Some(price) = changes.std_price {
        check_std_price(price)?;
    }
    if let Some(code) = &changes.code {
        if is_blank(code) {
            return Err(ServiceError::ValidationError("Material Code cannot be empty".to_string()));
        }
        ensure_material_code_free(db, code, Some(mm_id)).await?;
    }
    Ok(())
}

// Lookups

async fn require_po_header<C: ConnectionTrait>(db: &C, po_id: &str) -> Result<po_headers::Model, ServiceError> {
    po_headers::Entity::find_by_id(po_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("PO Header not found".to_string()))
}

async fn require_po_item<C: ConnectionTrait>(db: &C, key: &PoLineKey) -> Result<po_items::Model, ServiceError> {
    po_items::Entity::find_by_id((key.po_id.clone(), key.line_number))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("PO Item not found".to_string()))
}

async fn require_gr_header<C: ConnectionTrait>(db: &C, gr_id: &str) -> Result<gr_headers::Model, ServiceError> {
    gr_headers::Entity::find_by_id(gr_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("GR Header not found".to_string()))
}

async fn require_gr_item<C: ConnectionTrait>(db: &C, key: &GrLineKey) -> Result<gr_items::Model, ServiceError> {
    gr_items::Entity::find_by_id((key.gr_id.clone(), key.line_number))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("GR Item not found".to_string()))
}

async fn require_invoice_header<C: ConnectionTrait>(
    db: &C,
    inv_id: &str,
) -> Result<invoice_headers::Model, ServiceError> {
    invoice_headers::Entity::find_by_id(inv_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Invoice Header not found".to_string()))
}

async fn require_invoice_item<C: ConnectionTrait>(
    db: &C,
    key: &InvoiceLineKey,
) -> Result<invoice_items::Model, ServiceError> {
    invoice_items::Entity::find_by_id((key.inv_id.clone(), key.line_number))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Invoice item not found".to_string()))
}

async fn require_vendor<C: ConnectionTrait>(db: &C, vm_id: &str) -> Result<vendors::Model, ServiceError> {
    vendors::Entity::find_by_id(vm_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Vendor not found".to_string()))
}

async fn require_material<C: ConnectionTrait>(db: &C, mm_id: &str) -> Result<materials::Model, ServiceError> {
    materials::Entity::find_by_id(mm_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Material not found".to_string()))
}

async fn ensure_vendor_exists<C: ConnectionTrait>(db: &C, vm_id: &str) -> Result<(), ServiceError> {
    match vendors::Entity::find_by_id(vm_id.to_string()).one(db).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::ValidationError(format!("Vendor {} does not exist", vm_id))),
    }
}

async fn ensure_material_exists<C: ConnectionTrait>(db: &C, mm_id: &str) -> Result<(), ServiceError> {
    match materials::Entity::find_by_id(mm_id.to_string()).one(db).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::ValidationError(format!("Material {} does not exist", mm_id))),
    }
}

async fn ensure_vendor_code_free<C: ConnectionTrait>(
    db: &C,
    code: &str,
    owner: Option<&str>,
) -> Result<(), ServiceError> {
    let holder = vendors::Entity::find()
        .filter(vendors::Column::Code.eq(code))
        .one(db)
        .await?;
    match holder {
        Some(vendor) if Some(vendor.vm_id.as_str()) != owner => Err(ServiceError::Conflict(format!(
            "Vendor code {} already exists",
            code
        ))),
        _ => Ok(()),
    }
}

async fn ensure_material_code_free<C: ConnectionTrait>(
    db: &C,
    code: &str,
    owner: Option<&str>,
) -> Result<(), ServiceError> {
    let holder = materials::Entity::find()
        .filter(materials::Column::Code.eq(code))
        .one(db)
        .await?;
    match holder {
        Some(material) if Some(material.mm_id.as_str()) != owner => Err(ServiceError::Conflict(
            format!("Material code {} already exists", code),
        )),
        _ => Ok(()),
    }
}

/// A goods receipt may reference a PO that does not exist; only an existing
/// closed PO blocks it.
async fn ensure_po_open_if_present<C: ConnectionTrait>(db: &C, po_id: &str) -> Result<(), ServiceError> {
    match po_headers::Entity::find_by_id(po_id.to_string()).one(db).await? {
        Some(header) => ensure_po_open(&header),
        None => Ok(()),
    }
}

// Rules

pub fn ensure_po_open(header: &po_headers::Model) -> Result<(), ServiceError> {
    if header.is_closed() {
        Err(ServiceError::ValidationError(CLOSED_PO.to_string()))
    } else {
        Ok(())
    }
}

fn ensure_no_items(document: &str, id: &str, items: u64) -> Result<(), ServiceError> {
    if items > 0 {
        return Err(ServiceError::ValidationError(format!(
            "{} {} still has {} item(s) and cannot be deleted",
            document, id, items
        )));
    }
    Ok(())
}

fn require_id(document: &str, id: &str) -> Result<(), ServiceError> {
    if is_blank(id) {
        return Err(ServiceError::ValidationError(format!("{} id is required", document)));
    }
    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn check_ordered_qty(qty: Decimal) -> Result<(), ServiceError> {
    if qty <= Decimal::ZERO {
        return Err(ServiceError::ValidationError(
            "Order quantity must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

pub fn check_net_price(price: Decimal) -> Result<(), ServiceError> {
    if price < Decimal::ZERO {
        return Err(ServiceError::ValidationError("Net price cannot be negative".to_string()));
    }
    Ok(())
}

pub fn check_discount_pct(discount_pct: Decimal) -> Result<(), ServiceError> {
    if discount_pct < Decimal::ZERO || discount_pct > dec!(100) {
        return Err(ServiceError::ValidationError(
            "Discount percentage must be between 0 and 100".to_string(),
        ));
    }
    Ok(())
}

pub fn check_gst_pct(gst_pct: Decimal) -> Result<(), ServiceError> {
    if gst_pct < Decimal::ZERO {
        return Err(ServiceError::ValidationError("GST percentage cannot be negative".to_string()));
    }
    Ok(())
}

fn check_percentages(discount_pct: Decimal, gst_pct: Decimal) -> Result<(), ServiceError> {
    check_discount_pct(discount_pct)?;
    check_gst_pct(gst_pct)
}

pub fn check_received_on_create(qty: Decimal) -> Result<(), ServiceError> {
    if qty <= Decimal::ZERO {
        return Err(ServiceError::ValidationError(
            "Received quantity must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

pub fn check_received_on_update(qty: Decimal) -> Result<(), ServiceError> {
    if qty < Decimal::ZERO {
        return Err(ServiceError::ValidationError(
            "Received quantity cannot be negative".to_string(),
        ));
    }
    Ok(())
}

pub fn check_invoiced_on_create(qty: Decimal) -> Result<(), ServiceError> {
    if qty <= Decimal::ZERO {
        return Err(ServiceError::ValidationError(
            "Invoice quantity must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

pub fn check_invoiced_on_update(qty: Decimal) -> Result<(), ServiceError> {
    if qty < Decimal::ZERO {
        return Err(ServiceError::ValidationError("Invoice quantity cannot be negative".to_string()));
    }
    Ok(())
}

pub fn check_std_price(price: Decimal) -> Result<(), ServiceError> {
    if price < Decimal::ZERO {
        return Err(ServiceError::ValidationError(
            "Standard price cannot be negative".to_string(),
        ));
    }
    Ok(())
}

/// Both the code and the GST number must be present and non-blank. Returns
/// the code.
pub fn check_mandatory_codes<'a>(
    document: &str,
    code: Option<&'a str>,
    gst_no: Option<&str>,
) -> Result<&'a str, ServiceError> {
    match (code, gst_no) {
        (Some(code), Some(gst_no)) if !is_blank(code) && !is_blank(gst_no) => Ok(code),
        _ => Err(ServiceError::ValidationError(format!(
            "{} Code and GST Number are mandatory",
            document
        ))),
    }
}

// Create-time defaults

pub fn stamp_po_header(input: &NewPoHeader, now: DateTime<Utc>) -> po_headers::ActiveModel {
    po_headers::ActiveModel {
        po_id: Set(input.po_id.clone()),
        vendor_id: Set(input.vendor_id.clone()),
        status: Set(PoStatus::Draft),
        doc_date: Set(now),
        total_value: Set(Decimal::ZERO),
        approved_by: Set(None),
        approved_at: Set(None),
        remarks: Set(input.remarks.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Derived columns start empty; recalculation fills them in the same
/// transaction.
pub fn stamp_po_item(input: &NewPoItem, now: DateTime<Utc>) -> po_items::ActiveModel {
    po_items::ActiveModel {
        po_id: Set(input.po_id.clone()),
        line_number: Set(input.line_number),
        material_id: Set(input.material_id.clone()),
        ordered_qty: Set(input.ordered_qty),
        net_price: Set(input.net_price),
        discount_pct: Set(input.discount_pct),
        gst_pct: Set(input.gst_pct),
        netprice_value: Set(Decimal::ZERO),
        received_qty: Set(Decimal::ZERO),
        open_qty: Set(input.ordered_qty),
        status: Set(PoItemStatus::Open),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub fn stamp_gr_header(input: &NewGrHeader, now: DateTime<Utc>) -> gr_headers::ActiveModel {
    gr_headers::ActiveModel {
        gr_id: Set(input.gr_id.clone()),
        gr_date: Set(input.gr_date.unwrap_or(now)),
        status: Set(DocumentStatus::Draft),
        remarks: Set(input.remarks.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub fn stamp_gr_item(input: &NewGrItem, now: DateTime<Utc>) -> gr_items::ActiveModel {
    gr_items::ActiveModel {
        gr_id: Set(input.gr_id.clone()),
        line_number: Set(input.line_number),
        po_id: Set(input.po_id.clone()),
        po_line_number: Set(input.po_line_number),
        received_qty: Set(input.received_qty),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub fn stamp_invoice_header(input: &NewInvoiceHeader, now: DateTime<Utc>) -> invoice_headers::ActiveModel {
    invoice_headers::ActiveModel {
        inv_id: Set(input.inv_id.clone()),
        invoice_number: Set(input.invoice_number.clone()),
        po_id: Set(input.po_id.clone()),
        inv_date: Set(input.inv_date.unwrap_or(now)),
        status: Set(DocumentStatus::Draft),
        totalamt_before: Set(Decimal::ZERO),
        taxamt: Set(Decimal::ZERO),
        total_amount: Set(Decimal::ZERO),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub fn stamp_invoice_item(input: &NewInvoiceItem, now: DateTime<Utc>) -> invoice_items::ActiveModel {
    invoice_items::ActiveModel {
        inv_id: Set(input.inv_id.clone()),
        line_number: Set(input.line_number),
        po_id: Set(input.po_id.clone()),
        po_line_number: Set(input.po_line_number),
        invoiced_qty: Set(input.invoiced_qty),
        net_price: Set(input.net_price),
        discount_pct: Set(input.discount_pct),
        gst_pct: Set(input.gst_pct),
        netamt: Set(Decimal::ZERO),
        taxamt: Set(Decimal::ZERO),
        totalamt: Set(Decimal::ZERO),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// New master data starts inactive.
pub fn stamp_vendor(input: &NewVendor, now: DateTime<Utc>) -> vendors::ActiveModel {
    vendors::ActiveModel {
        vm_id: Set(input.vm_id.clone()),
        code: Set(input.code.clone().unwrap_or_default()),
        name: Set(input.name.clone()),
        gst_no: Set(input.gst_no.clone().unwrap_or_default()),
        is_active: Set(ActiveStatus::Inactive),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub fn stamp_material(input: &NewMaterial, now: DateTime<Utc>) -> materials::ActiveModel {
    materials::ActiveModel {
        mm_id: Set(input.mm_id.clone()),
        code: Set(input.code.clone().unwrap_or_default()),
        description: Set(input.description.clone()),
        gst_no: Set(input.gst_no.clone().unwrap_or_default()),
        std_price: Set(input.std_price.unwrap_or(Decimal::ZERO)),
        is_active: Set(ActiveStatus::Inactive),
        created_at: Set(now),
        updated_at: Set(now),
    }
}
