use super::{CapabilitySet, RoleKind};
use crate::common::entity_ids::UserId;
use crate::common::error::{DomainError, DomainResult};

/// Authenticated request context passed into workflow operations.
///
/// The identity comes from the auth provider; the capability set is resolved
/// once from the role ledger when the request enters the core
/// (`accounts::actions::capabilities_of`).
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub actor: UserId,
    pub capabilities: CapabilitySet,
}

impl RequestContext {
    pub fn new(actor: UserId, capabilities: CapabilitySet) -> Self {
        Self {
            actor,
            capabilities,
        }
    }

    /// Fail with PermissionDenied unless the actor holds `role`.
    pub fn require(&self, role: RoleKind) -> DomainResult<()> {
        if self.capabilities.has(role) {
            Ok(())
        } else {
            Err(DomainError::PermissionDenied(format!(
                "requires the {} role",
                role
            )))
        }
    }

    /// Fail with PermissionDenied unless the actor is `user`.
    pub fn require_self(&self, user: UserId, what: &str) -> DomainResult<()> {
        if self.actor == user {
            Ok(())
        } else {
            Err(DomainError::PermissionDenied(format!(
                "only the owner may {}",
                what
            )))
        }
    }
}
