//! Active-role selection.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, RoleKind, UserId};
use crate::domains::accounts::models::{RoleGrant, User};

/// Switch the role context a user's requests are authorized under.
///
/// Requires an approved grant for the role. Self-approving roles take the
/// fast path: a missing grant is created (already approved) on the spot, so
/// a job seeker can activate without any admin involvement.
pub async fn set_active_role(user_id: UserId, kind: RoleKind, pool: &PgPool) -> DomainResult<User> {
    let grant = RoleGrant::find_for_user(user_id, kind, pool).await?;

    let approved = match grant {
        Some(ref g) => g.approved,
        None => false,
    };

    if !approved {
        if kind.is_self_approving() {
            RoleGrant::upsert_request(user_id, kind, true, pool).await?;
        } else {
            return Err(DomainError::PermissionDenied(format!(
                "no approved {} grant for this user",
                kind
            )));
        }
    }

    let user = User::set_active_role(user_id, Some(kind.as_str()), pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => DomainError::NotFound("user"),
            other => other.into(),
        })?;

    info!(user_id = %user_id, role = %kind, "Active role set");

    Ok(user)
}
