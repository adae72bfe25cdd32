mod common;

use assert_matches::assert_matches;
use common::{po_item, TestLedger};
use procurement_ledger::{
    documents::{MaterialChanges, Mutation, NewMaterial, NewPoHeader, NewVendor, VendorChanges},
    entities::ActiveStatus,
    ServiceError,
};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[tokio::test]
async fn new_vendor_starts_inactive_and_can_be_activated() {
    let ledger = TestLedger::new().await;
    ledger.create_vendor("VM-1", "V-001").await;
    assert!(ledger.service.get_active_vendors().await.unwrap().is_empty());
    assert!(ledger.service.vendor_exists("V-001").await.unwrap());
    assert!(!ledger.service.vendor_exists("V-999").await.unwrap());

    let vendor = ledger.service.activate_vendor("VM-1", &ledger.actor).await.unwrap();
    assert_eq!(vendor.is_active, ActiveStatus::Active);
    let active = ledger.service.get_active_vendors().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].code, "V-001");

    ledger.service.deactivate_vendor("VM-1", &ledger.actor).await.unwrap();
    assert!(ledger.service.get_active_vendors().await.unwrap().is_empty());
}

#[tokio::test]
async fn active_materials_are_listed() {
    let ledger = TestLedger::new().await;
    ledger.create_material("MM-1", "M-001").await;
    ledger.create_material("MM-2", "M-002").await;
    ledger.service.activate_material("MM-2", &ledger.actor).await.unwrap();

    let active = ledger.service.get_active_materials().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].mm_id, "MM-2");

    ledger.service.deactivate_material("MM-2", &ledger.actor).await.unwrap();
    assert!(ledger.service.get_active_materials().await.unwrap().is_empty());
}

#[tokio::test]
async fn activation_of_missing_master_data_is_not_found() {
    let ledger = TestLedger::new().await;
    assert_matches!(
        ledger.service.activate_vendor("VM-404", &ledger.actor).await,
        Err(ServiceError::NotFound(_))
    );
    assert_matches!(
        ledger.service.activate_material("MM-404", &ledger.actor).await,
        Err(ServiceError::NotFound(_))
    );
}

#[rstest]
#[case(None, Some("29ABCDE1234F1Z5"))]
#[case(Some("V-002"), None)]
#[case(Some(""), Some("29ABCDE1234F1Z5"))]
#[tokio::test]
async fn vendor_code_and_gst_are_mandatory(#[case] code: Option<&str>, #[case] gst_no: Option<&str>) {
    let ledger = TestLedger::new().await;
    let result = ledger
        .service
        .apply(
            Mutation::CreateVendor(NewVendor {
                vm_id: "VM-2".into(),
                code: code.map(str::to_string),
                name: None,
                gst_no: gst_no.map(str::to_string),
            }),
            &ledger.actor,
        )
        .await;
    assert_matches!(
        result,
        Err(ServiceError::ValidationError(msg)) if msg == "Vendor Code and GST Number are mandatory"
    );
}

#[tokio::test]
async fn vendor_code_cannot_be_blanked_or_duplicated() {
    let ledger = TestLedger::new().await;
    ledger.create_vendor("VM-1", "V-001").await;
    ledger.create_vendor("VM-2", "V-002").await;

    let blank = ledger
        .service
        .apply(
            Mutation::UpdateVendor {
                vm_id: "VM-1".into(),
                changes: VendorChanges {
                    code: Some(String::new()),
                    ..Default::default()
                },
            },
            &ledger.actor,
        )
        .await;
    assert_matches!(blank, Err(ServiceError::ValidationError(msg)) if msg == "Vendor Code cannot be empty");

    let taken = ledger
        .service
        .apply(
            Mutation::UpdateVendor {
                vm_id: "VM-1".into(),
                changes: VendorChanges {
                    code: Some("V-002".into()),
                    ..Default::default()
                },
            },
            &ledger.actor,
        )
        .await;
    assert_matches!(taken, Err(ServiceError::Conflict(_)));

    // Re-saving its own code is not a conflict.
    ledger
        .apply(Mutation::UpdateVendor {
            vm_id: "VM-1".into(),
            changes: VendorChanges {
                code: Some("V-001".into()),
                name: Some("Renamed".into()),
                ..Default::default()
            },
        })
        .await;
}

#[tokio::test]
async fn material_price_cannot_go_negative() {
    let ledger = TestLedger::new().await;
    let negative_create = ledger
        .service
        .apply(
            Mutation::CreateMaterial(NewMaterial {
                mm_id: "MM-1".into(),
                code: Some("M-001".into()),
                description: None,
                gst_no: Some("29ABCDE1234F1Z5".into()),
                std_price: Some(dec!(-1)),
            }),
            &ledger.actor,
        )
        .await;
    assert_matches!(negative_create, Err(ServiceError::ValidationError(_)));

    ledger.create_material("MM-1", "M-001").await;
    let negative_update = ledger
        .service
        .apply(
            Mutation::UpdateMaterial {
                mm_id: "MM-1".into(),
                changes: MaterialChanges {
                    std_price: Some(dec!(-0.5)),
                    ..Default::default()
                },
            },
            &ledger.actor,
        )
        .await;
    assert_matches!(
        negative_update,
        Err(ServiceError::ValidationError(msg)) if msg == "Standard price cannot be negative"
    );
}

#[tokio::test]
async fn referenced_vendor_cannot_be_deleted() {
    let ledger = TestLedger::new().await;
    ledger.create_vendor("VM-1", "V-001").await;
    ledger.create_vendor("VM-2", "V-002").await;
    ledger
        .apply(Mutation::CreatePoHeader(NewPoHeader {
            po_id: "PO-1".into(),
            vendor_id: Some("VM-1".into()),
            ..Default::default()
        }))
        .await;

    let used = ledger
        .service
        .apply(Mutation::DeleteVendor { vm_id: "VM-1".into() }, &ledger.actor)
        .await;
    assert_matches!(
        used,
        Err(ServiceError::ReferentialIntegrity(msg)) if msg == "Vendor is used in PO and cannot be deleted"
    );

    ledger
        .apply(Mutation::DeleteVendor { vm_id: "VM-2".into() })
        .await;
    assert!(!ledger.service.vendor_exists("V-002").await.unwrap());

    let missing = ledger
        .service
        .apply(Mutation::DeleteVendor { vm_id: "VM-2".into() }, &ledger.actor)
        .await;
    assert_matches!(missing, Err(ServiceError::NotFound(_)));
}

#[tokio::test]
async fn referenced_material_cannot_be_deleted() {
    let ledger = TestLedger::new().await;
    ledger.create_material("MM-1", "M-001").await;
    ledger.create_material("MM-2", "M-002").await;
    ledger.create_po("PO-1").await;
    let mut item = po_item("PO-1", 1, dec!(1), dec!(10), Decimal::ZERO, Decimal::ZERO);
    item.material_id = Some("MM-1".into());
    ledger.apply(Mutation::CreatePoItem(item)).await;

    let used = ledger
        .service
        .apply(Mutation::DeleteMaterial { mm_id: "MM-1".into() }, &ledger.actor)
        .await;
    assert_matches!(used, Err(ServiceError::ReferentialIntegrity(_)));

    ledger
        .apply(Mutation::DeleteMaterial { mm_id: "MM-2".into() })
        .await;
}

#[tokio::test]
async fn unknown_vendor_reference_is_rejected() {
    let ledger = TestLedger::new().await;
    let result = ledger
        .service
        .apply(
            Mutation::CreatePoHeader(NewPoHeader {
                po_id: "PO-1".into(),
                vendor_id: Some("VM-404".into()),
                ..Default::default()
            }),
            &ledger.actor,
        )
        .await;
    assert_matches!(result, Err(ServiceError::ValidationError(_)));
}
