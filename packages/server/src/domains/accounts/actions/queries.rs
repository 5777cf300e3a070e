//! Role ledger queries.

use sqlx::PgPool;
use tracing::warn;

use crate::common::{CapabilitySet, DomainResult, RoleKind, UserId};
use crate::domains::accounts::models::RoleGrant;

/// Resolve the capability set for a user: the role kinds with an approved
/// grant in the ledger.
///
/// Called once per request; every authorization check downstream consumes
/// the returned set instead of re-reading user state.
pub async fn capabilities_of(user_id: UserId, pool: &PgPool) -> DomainResult<CapabilitySet> {
    let kinds = RoleGrant::approved_kinds(user_id, pool).await?;

    let roles = kinds.iter().filter_map(|kind| {
        kind.parse::<RoleKind>()
            .map_err(|e| warn!(user_id = %user_id, kind = %kind, "Skipping unknown role kind: {e}"))
            .ok()
    });

    Ok(CapabilitySet::new(roles))
}
