#![allow(dead_code)]

use std::sync::Arc;

use procurement_ledger::{
    actor::ActorContext,
    db::{self, DbConfig, DbPool},
    documents::{
        Mutation, NewGrHeader, NewGrItem, NewInvoiceHeader, NewInvoiceItem, NewMaterial,
        NewPoHeader, NewPoItem, NewVendor,
    },
    services::ledger::MutationOutcome,
    EnginePolicy, ProcurementService,
};
use rust_decimal::Decimal;

/// Engine backed by a fresh, migrated in-memory SQLite database.
pub struct TestLedger {
    pub db: Arc<DbPool>,
    pub service: ProcurementService,
    pub actor: ActorContext,
}

impl TestLedger {
    pub async fn new() -> Self {
        Self::with_policy(EnginePolicy::default()).await
    }

    pub async fn with_policy(policy: EnginePolicy) -> Self {
        let pool = db::establish_connection_with_config(&DbConfig::in_memory_sqlite())
            .await
            .expect("failed to open in-memory database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations");
        let db = Arc::new(pool);
        Self {
            service: ProcurementService::new(db.clone(), policy),
            db,
            actor: ActorContext::new("buyer-1"),
        }
    }

    pub async fn apply(&self, mutation: Mutation) -> MutationOutcome {
        self.service
            .apply(mutation, &self.actor)
            .await
            .expect("mutation should be accepted")
    }

    pub async fn create_po(&self, po_id: &str) -> MutationOutcome {
        self.apply(Mutation::CreatePoHeader(NewPoHeader {
            po_id: po_id.to_string(),
            ..Default::default()
        }))
        .await
    }

    pub async fn add_po_item(
        &self,
        po_id: &str,
        line_number: i32,
        ordered_qty: Decimal,
        net_price: Decimal,
        discount_pct: Decimal,
        gst_pct: Decimal,
    ) -> MutationOutcome {
        self.apply(Mutation::CreatePoItem(po_item(
            po_id,
            line_number,
            ordered_qty,
            net_price,
            discount_pct,
            gst_pct,
        )))
        .await
    }

    pub async fn create_gr(&self, gr_id: &str) -> MutationOutcome {
        self.apply(Mutation::CreateGrHeader(NewGrHeader {
            gr_id: gr_id.to_string(),
            ..Default::default()
        }))
        .await
    }

    pub async fn receive(
        &self,
        gr_id: &str,
        line_number: i32,
        po_id: &str,
        po_line_number: i32,
        received_qty: Decimal,
    ) -> MutationOutcome {
        self.apply(Mutation::CreateGrItem(gr_item(
            gr_id,
            line_number,
            po_id,
            po_line_number,
            received_qty,
        )))
        .await
    }

    pub async fn create_invoice(&self, inv_id: &str, po_id: Option<&str>) -> MutationOutcome {
        self.apply(Mutation::CreateInvoiceHeader(NewInvoiceHeader {
            inv_id: inv_id.to_string(),
            invoice_number: Some(format!("{}-NO", inv_id)),
            po_id: po_id.map(str::to_string),
            inv_date: None,
        }))
        .await
    }

    pub async fn create_vendor(&self, vm_id: &str, code: &str) -> MutationOutcome {
        self.apply(Mutation::CreateVendor(NewVendor {
            vm_id: vm_id.to_string(),
            code: Some(code.to_string()),
            name: Some(format!("Vendor {}", code)),
            gst_no: Some("29ABCDE1234F1Z5".to_string()),
        }))
        .await
    }

    pub async fn create_material(&self, mm_id: &str, code: &str) -> MutationOutcome {
        self.apply(Mutation::CreateMaterial(NewMaterial {
            mm_id: mm_id.to_string(),
            code: Some(code.to_string()),
            description: Some(format!("Material {}", code)),
            gst_no: Some("29ABCDE1234F1Z5".to_string()),
            std_price: None,
        }))
        .await
    }

    pub async fn audit_count(&self, document_id: &str) -> usize {
        self.service
            .audit_trail(document_id)
            .await
            .expect("audit trail should load")
            .len()
    }
}

pub fn po_item(
    po_id: &str,
    line_number: i32,
    ordered_qty: Decimal,
    net_price: Decimal,
    discount_pct: Decimal,
    gst_pct: Decimal,
) -> NewPoItem {
    NewPoItem {
        po_id: po_id.to_string(),
        line_number,
        material_id: None,
        ordered_qty,
        net_price,
        discount_pct,
        gst_pct,
    }
}

pub fn gr_item(
    gr_id: &str,
    line_number: i32,
    po_id: &str,
    po_line_number: i32,
    received_qty: Decimal,
) -> NewGrItem {
    NewGrItem {
        gr_id: gr_id.to_string(),
        line_number,
        po_id: po_id.to_string(),
        po_line_number,
        received_qty,
    }
}

pub fn invoice_item(
    inv_id: &str,
    line_number: i32,
    po_line: Option<(&str, i32)>,
    invoiced_qty: Decimal,
    net_price: Decimal,
    discount_pct: Decimal,
    gst_pct: Decimal,
) -> NewInvoiceItem {
    NewInvoiceItem {
        inv_id: inv_id.to_string(),
        line_number,
        po_id: po_line.map(|(po_id, _)| po_id.to_string()),
        po_line_number: po_line.map(|(_, line)| line),
        invoiced_qty,
        net_price,
        discount_pct,
        gst_pct,
    }
}
