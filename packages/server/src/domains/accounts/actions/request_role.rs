//! Role request action - creates or returns the role grant for a user.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainResult, RoleKind, UserId};
use crate::domains::accounts::models::RoleGrant;

/// Request a role for a user.
///
/// Idempotent: if a grant for (user, role) already exists it is returned
/// unchanged, whatever its approval state. Self-approving roles (job seeker)
/// come back approved immediately; everything else waits for an admin.
pub async fn request_role(
    user_id: UserId,
    kind: RoleKind,
    pool: &PgPool,
) -> DomainResult<RoleGrant> {
    let grant = RoleGrant::upsert_request(user_id, kind, kind.is_self_approving(), pool).await?;

    info!(
        user_id = %user_id,
        role = %kind,
        approved = grant.approved,
        "Role grant requested"
    );

    Ok(grant)
}
