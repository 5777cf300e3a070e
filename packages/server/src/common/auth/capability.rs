use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Roles a user can hold in the platform.
///
/// Stored as text in `role_grants.role_kind` and `users.active_role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    /// Job seeker. Self-approving: the grant is approved at creation.
    JobSeeker,
    /// Employer. Requires admin approval before it can become active.
    Employer,
    /// Platform administrator.
    Admin,
}

impl RoleKind {
    /// Whether a grant for this role is approved automatically at creation,
    /// with no admin action required.
    pub fn is_self_approving(&self) -> bool {
        matches!(self, RoleKind::JobSeeker)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::JobSeeker => "job_seeker",
            RoleKind::Employer => "employer",
            RoleKind::Admin => "admin",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "job_seeker" => Ok(RoleKind::JobSeeker),
            "employer" => Ok(RoleKind::Employer),
            "admin" => Ok(RoleKind::Admin),
            _ => Err(anyhow::anyhow!("Invalid role kind: {}", s)),
        }
    }
}

/// The set of approved roles a user holds.
///
/// Resolved once per request from the role ledger and passed explicitly into
/// workflow operations; never re-derived from profile attributes mid-request.
#[derive(Debug, Clone, Default)]
pub struct CapabilitySet {
    roles: HashSet<RoleKind>,
}

impl CapabilitySet {
    pub fn new(roles: impl IntoIterator<Item = RoleKind>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has(&self, role: RoleKind) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has(RoleKind::Admin)
    }

    pub fn iter(&self) -> impl Iterator<Item = RoleKind> + '_ {
        self.roles.iter().copied()
    }
}
