use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use tracing::info;

use crate::actor::ActorContext;
use crate::documents::PoTransition;
use crate::entities::{po_headers, PoStatus};
use crate::errors::ServiceError;

/// Check a transition against the current status.
///
/// Without `strict`, every transition is allowed from any state.
pub fn check_transition(
    current: PoStatus,
    transition: &PoTransition,
    strict: bool,
) -> Result<(), ServiceError> {
    if !strict {
        return Ok(());
    }
    let required = transition.required_source();
    if current == required {
        Ok(())
    } else {
        Err(ServiceError::InvalidOperation(format!(
            "Cannot {} a purchase order in status '{}'; expected '{}'",
            transition.name(),
            current,
            required
        )))
    }
}

/// Write the transition onto the header.
///
/// Approval stamps the approver and time; rejection stores the reason in
/// `remarks`.
pub async fn apply_transition<C: ConnectionTrait>(
    db: &C,
    header: po_headers::Model,
    transition: &PoTransition,
    actor: &ActorContext,
    now: DateTime<Utc>,
) -> Result<po_headers::Model, ServiceError> {
    let po_id = header.po_id.clone();
    let from = header.status;
    let to = transition.target_status();

    let mut active: po_headers::ActiveModel = header.into();
    active.status = Set(to);
    active.updated_at = Set(now);
    match transition {
        PoTransition::Approve => {
            active.approved_by = Set(Some(actor.id().to_string()));
            active.approved_at = Set(Some(now));
        }
        PoTransition::Reject { reason } => {
            active.remarks = Set(Some(reason.clone()));
        }
        PoTransition::Submit | PoTransition::Close => {}
    }
    let updated = active.update(db).await?;

    info!(po_id = %po_id, %from, %to, actor = actor.id(), "purchase order {}", transition.name());
    Ok(updated)
}
