mod common;

use assert_matches::assert_matches;
use common::TestLedger;
use procurement_ledger::{
    actor::ActorContext,
    entities::PoStatus,
    EnginePolicy, ServiceError,
};

#[tokio::test]
async fn full_lifecycle_stamps_approver_and_time() {
    let ledger = TestLedger::new().await;
    ledger.create_po("PO-1").await;

    let submitted = ledger.service.submit_po("PO-1", &ledger.actor).await.unwrap();
    assert_eq!(submitted.status, PoStatus::Submitted);
    assert!(submitted.approved_by.is_none());

    let approver = ActorContext::new("manager-7");
    let approved = ledger.service.approve_po("PO-1", &approver).await.unwrap();
    assert_eq!(approved.status, PoStatus::Approved);
    assert_eq!(approved.approved_by.as_deref(), Some("manager-7"));
    assert!(approved.approved_at.is_some());

    let closed = ledger.service.close_po("PO-1", &ledger.actor).await.unwrap();
    assert_eq!(closed.status, PoStatus::Closed);
    assert_eq!(
        ledger.service.get_po_status("PO-1").await.unwrap(),
        Some(PoStatus::Closed)
    );
}

#[tokio::test]
async fn approval_without_actor_is_stamped_system() {
    let ledger = TestLedger::new().await;
    ledger.create_po("PO-2").await;

    let approved = ledger
        .service
        .approve_po("PO-2", &ActorContext::system())
        .await
        .unwrap();
    assert_eq!(approved.approved_by.as_deref(), Some("SYSTEM"));
}

#[tokio::test]
async fn rejection_keeps_the_reason_in_remarks() {
    let ledger = TestLedger::new().await;
    ledger.create_po("PO-3").await;
    ledger.service.submit_po("PO-3", &ledger.actor).await.unwrap();

    let rejected = ledger
        .service
        .reject_po("PO-3", "price above contract", &ledger.actor)
        .await
        .unwrap();
    assert_eq!(rejected.status, PoStatus::Rejected);
    assert_eq!(rejected.remarks.as_deref(), Some("price above contract"));
}

#[tokio::test]
async fn transitions_are_unconditional_by_default() {
    let ledger = TestLedger::new().await;
    ledger.create_po("PO-4").await;

    // Straight from draft to approved, then back to submitted.
    ledger.service.approve_po("PO-4", &ledger.actor).await.unwrap();
    let resubmitted = ledger.service.submit_po("PO-4", &ledger.actor).await.unwrap();
    assert_eq!(resubmitted.status, PoStatus::Submitted);
}

#[tokio::test]
async fn strict_transitions_enforce_the_source_state() {
    let ledger = TestLedger::with_policy(EnginePolicy {
        strict_transitions: true,
        ..Default::default()
    })
    .await;
    ledger.create_po("PO-5").await;

    let early_approval = ledger.service.approve_po("PO-5", &ledger.actor).await;
    assert_matches!(early_approval, Err(ServiceError::InvalidOperation(_)));
    assert_eq!(
        ledger.service.get_po_status("PO-5").await.unwrap(),
        Some(PoStatus::Draft)
    );

    ledger.service.submit_po("PO-5", &ledger.actor).await.unwrap();
    let early_close = ledger.service.close_po("PO-5", &ledger.actor).await;
    assert_matches!(early_close, Err(ServiceError::InvalidOperation(_)));

    ledger.service.approve_po("PO-5", &ledger.actor).await.unwrap();
    ledger.service.close_po("PO-5", &ledger.actor).await.unwrap();
    assert_eq!(
        ledger.service.get_po_status("PO-5").await.unwrap(),
        Some(PoStatus::Closed)
    );
}

#[tokio::test]
async fn transition_of_unknown_po_is_not_found() {
    let ledger = TestLedger::new().await;
    let result = ledger.service.submit_po("PO-404", &ledger.actor).await;
    assert_matches!(result, Err(ServiceError::NotFound(_)));
}

#[tokio::test]
async fn transitions_are_audited_as_header_updates() {
    let ledger = TestLedger::new().await;
    ledger.create_po("PO-6").await;
    ledger.service.submit_po("PO-6", &ledger.actor).await.unwrap();
    ledger.service.approve_po("PO-6", &ledger.actor).await.unwrap();

    let trail = ledger.service.audit_trail("PO-6").await.unwrap();
    let labels: Vec<_> = trail.iter().map(|r| r.status_label.as_str()).collect();
    assert_eq!(labels, vec!["POHeaders_CREATE", "POHeaders_UPDATE", "POHeaders_UPDATE"]);
}
