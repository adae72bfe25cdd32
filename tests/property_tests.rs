//! Property-based tests for the derived-value formulas and recomputation.
//!
//! Pure formulas run many cases; the database-backed properties replay
//! random mutation sequences against an in-memory ledger and use fewer.

mod common;

use proptest::prelude::*;
use procurement_ledger::{
    documents::{GrLineKey, Mutation, PoItemChanges, PoLineKey},
    entities::PoItemStatus,
    services::{pricing::LineAmounts, reconciliation::ReceiptState},
};
use rust_decimal::Decimal;

fn qty_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000).prop_map(Decimal::from)
}

fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn pct_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=100).prop_map(Decimal::from)
}

fn gst_strategy() -> impl Strategy<Value = Decimal> {
    prop_oneof![Just(0i64), Just(5), Just(12), Just(18), Just(28)].prop_map(Decimal::from)
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime")
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn line_amounts_are_consistent(
        qty in qty_strategy(),
        price in price_strategy(),
        discount in pct_strategy(),
        gst in gst_strategy(),
    ) {
        let amounts = LineAmounts::compute(qty, price, discount, gst);
        prop_assert_eq!(amounts.gross, qty * price);
        prop_assert_eq!(amounts.net, amounts.gross - amounts.discount);
        prop_assert_eq!(amounts.total, amounts.net + amounts.tax);
        prop_assert!(amounts.net >= Decimal::ZERO);
        prop_assert!(amounts.net <= amounts.gross);
        prop_assert!(amounts.tax >= Decimal::ZERO);
    }

    #[test]
    fn receipt_state_is_full_exactly_when_nothing_is_open(
        ordered in qty_strategy(),
        received in (0i64..20_000).prop_map(Decimal::from),
    ) {
        let state = ReceiptState::derive(ordered, received);
        prop_assert_eq!(state.open_qty, (ordered - received).max(Decimal::ZERO));
        prop_assert_eq!(state.status == PoItemStatus::FullReceived, state.open_qty.is_zero());
        prop_assert!(state.open_qty >= Decimal::ZERO);
    }
}

#[derive(Debug, Clone)]
enum ItemOp {
    Add { qty: i64, price: i64 },
    Reprice { line: usize, price: i64 },
    Remove { line: usize },
}

fn item_op_strategy() -> impl Strategy<Value = ItemOp> {
    prop_oneof![
        (1i64..50, 0i64..500).prop_map(|(qty, price)| ItemOp::Add { qty, price }),
        (0usize..8, 0i64..500).prop_map(|(line, price)| ItemOp::Reprice { line, price }),
        (0usize..8).prop_map(|line| ItemOp::Remove { line }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn po_total_always_equals_sum_of_item_values(ops in prop::collection::vec(item_op_strategy(), 1..12)) {
        block_on(async {
            let ledger = common::TestLedger::new().await;
            ledger.create_po("PO-P").await;
            let mut lines: Vec<i32> = Vec::new();
            let mut next_line = 1;

            for op in ops {
                match op {
                    ItemOp::Add { qty, price } => {
                        ledger
                            .add_po_item("PO-P", next_line, Decimal::from(qty), Decimal::from(price), Decimal::ZERO, Decimal::from(18))
                            .await;
                        lines.push(next_line);
                        next_line += 1;
                    }
                    ItemOp::Reprice { line, price } if !lines.is_empty() => {
                        let line_number = lines[line % lines.len()];
                        ledger
                            .apply(Mutation::UpdatePoItem {
                                key: PoLineKey::new("PO-P", line_number),
                                changes: PoItemChanges {
                                    net_price: Some(Decimal::from(price)),
                                    ..Default::default()
                                },
                            })
                            .await;
                    }
                    ItemOp::Remove { line } if !lines.is_empty() => {
                        let line_number = lines.remove(line % lines.len());
                        ledger.apply(Mutation::DeletePoItem(PoLineKey::new("PO-P", line_number))).await;
                    }
                    _ => {}
                }

                let items = ledger.service.get_po_items("PO-P").await.unwrap();
                let expected: Decimal = items.iter().map(|item| item.netprice_value).sum();
                let total = ledger.service.get_po_total("PO-P").await.unwrap();
                assert_eq!(total.round_dp(6), expected.round_dp(6));
                assert_eq!(items.len(), lines.len());
            }
        });
    }

    #[test]
    fn received_quantity_always_equals_sum_of_receipts(
        receipts in prop::collection::vec((1i64..8, any::<bool>()), 1..10),
    ) {
        block_on(async {
            let ledger = common::TestLedger::new().await;
            ledger.create_po("PO-R").await;
            ledger
                .add_po_item("PO-R", 1, Decimal::from(20), Decimal::from(10), Decimal::ZERO, Decimal::ZERO)
                .await;
            ledger.create_gr("GR-R").await;

            let mut posted: Vec<(i32, i64)> = Vec::new();
            for (line, (qty, delete_previous)) in receipts.into_iter().enumerate() {
                let gr_line = line as i32 + 1;
                ledger.receive("GR-R", gr_line, "PO-R", 1, Decimal::from(qty)).await;
                posted.push((gr_line, qty));
                if delete_previous && posted.len() > 1 {
                    let (victim, _) = posted.remove(0);
                    ledger.apply(Mutation::DeleteGrItem(GrLineKey::new("GR-R", victim))).await;
                }

                let item = ledger
                    .service
                    .get_po_item(&PoLineKey::new("PO-R", 1))
                    .await
                    .unwrap()
                    .expect("line exists");
                let expected = Decimal::from(posted.iter().map(|(_, q)| q).sum::<i64>());
                assert_eq!(item.received_qty, expected);
                assert_eq!(item.open_qty, (Decimal::from(20) - expected).max(Decimal::ZERO));
                assert_eq!(item.status == PoItemStatus::FullReceived, item.open_qty.is_zero());
            }
        });
    }
}
