//! Admin approval of a pending role grant.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, GrantId, RequestContext, RoleKind};
use crate::domains::accounts::models::RoleGrant;
use crate::domains::notifications::actions::notify_in_tx;
use crate::domains::notifications::models::NotificationKind;

/// Approve a role grant (`Requested -> Approved`). Admin only.
///
/// Runs in one transaction: the grant row is locked and re-checked before
/// the update so two concurrent approvals serialize, and the requester +
/// admin audit notifications commit atomically with the approval.
/// Re-approving an already-approved grant is a no-op, not an error.
pub async fn approve_role(
    ctx: &RequestContext,
    grant_id: GrantId,
    pool: &PgPool,
) -> DomainResult<RoleGrant> {
    ctx.require(RoleKind::Admin)?;

    let mut tx = pool.begin().await?;

    let grant = RoleGrant::find_by_id_for_update(grant_id, &mut tx)
        .await?
        .ok_or(DomainError::NotFound("role grant"))?;

    if grant.approved {
        // Idempotent re-approval: keep the original approver and timestamp.
        tx.rollback().await?;
        return Ok(grant);
    }

    let approved = RoleGrant::approve(grant_id, ctx.actor, &mut tx).await?;

    notify_in_tx(
        approved.user_id,
        NotificationKind::System,
        &format!("Your {} role has been activated", approved.role_kind),
        Some(&format!("/roles/{}", approved.id)),
        &mut tx,
    )
    .await?;

    notify_in_tx(
        ctx.actor,
        NotificationKind::System,
        &format!(
            "You approved the {} role for user {}",
            approved.role_kind, approved.user_id
        ),
        Some(&format!("/roles/{}", approved.id)),
        &mut tx,
    )
    .await?;

    tx.commit().await?;

    info!(
        grant_id = %approved.id,
        user_id = %approved.user_id,
        admin = %ctx.actor,
        role = %approved.role_kind,
        "Role grant approved"
    );

    Ok(approved)
}
