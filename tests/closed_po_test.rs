mod common;

use assert_matches::assert_matches;
use common::{gr_item, po_item, TestLedger};
use procurement_ledger::{
    documents::{GrItemChanges, GrLineKey, Mutation, NewPoHeader, PoHeaderChanges, PoItemChanges, PoLineKey},
    ServiceError,
};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const CLOSED: &str = "Closed PO cannot be modified";

/// PO-C with one received line, approved and closed.
async fn closed_po() -> TestLedger {
    let ledger = TestLedger::new().await;
    ledger.create_po("PO-C").await;
    ledger
        .add_po_item("PO-C", 1, dec!(10), dec!(100), dec!(10), dec!(18))
        .await;
    ledger.create_gr("GR-C").await;
    ledger.receive("GR-C", 1, "PO-C", 1, dec!(4)).await;
    ledger.service.approve_po("PO-C", &ledger.actor).await.unwrap();
    ledger.service.close_po("PO-C", &ledger.actor).await.unwrap();
    ledger
}

#[rstest]
#[case::item_price(Mutation::UpdatePoItem {
    key: PoLineKey::new("PO-C", 1),
    changes: PoItemChanges { net_price: Some(dec!(1)), ..Default::default() },
})]
#[case::item_quantity(Mutation::UpdatePoItem {
    key: PoLineKey::new("PO-C", 1),
    changes: PoItemChanges { ordered_qty: Some(dec!(50)), ..Default::default() },
})]
#[case::new_item(Mutation::CreatePoItem(po_item("PO-C", 2, dec!(1), dec!(1), Decimal::ZERO, Decimal::ZERO)))]
#[case::delete_item(Mutation::DeletePoItem(PoLineKey::new("PO-C", 1)))]
#[case::header(Mutation::UpdatePoHeader {
    po_id: "PO-C".into(),
    changes: PoHeaderChanges { remarks: Some("late".into()), ..Default::default() },
})]
#[case::recreate_header(Mutation::CreatePoHeader(NewPoHeader { po_id: "PO-C".into(), ..Default::default() }))]
#[case::delete_header(Mutation::DeletePoHeader { po_id: "PO-C".into() })]
#[case::new_receipt(Mutation::CreateGrItem(gr_item("GR-C", 2, "PO-C", 1, dec!(1))))]
#[case::change_receipt(Mutation::UpdateGrItem {
    key: GrLineKey::new("GR-C", 1),
    changes: GrItemChanges { received_qty: Some(dec!(10)) },
})]
#[case::delete_receipt(Mutation::DeleteGrItem(GrLineKey::new("GR-C", 1)))]
#[tokio::test]
async fn closed_po_rejects_changes(#[case] mutation: Mutation) {
    let ledger = closed_po().await;
    let audit_before = ledger.audit_count("PO-C").await;

    let result = ledger.service.apply(mutation, &ledger.actor).await;
    assert_matches!(result, Err(ServiceError::ValidationError(msg)) if msg == CLOSED);

    let item = ledger
        .service
        .get_po_item(&PoLineKey::new("PO-C", 1))
        .await
        .unwrap()
        .expect("line untouched");
    assert_eq!(item.netprice_value, dec!(1062));
    assert_eq!(item.received_qty, dec!(4));
    assert_eq!(ledger.service.get_po_total("PO-C").await.unwrap(), dec!(1062));
    assert_eq!(ledger.audit_count("PO-C").await, audit_before);
}
