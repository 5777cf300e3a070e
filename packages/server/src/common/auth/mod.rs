//! Authorization primitives for the recruitment platform.
//!
//! Workflow operations receive a `RequestContext` carrying the actor's
//! identity and a `CapabilitySet` resolved once from the role ledger:
//!
//! ```ignore
//! let caps = accounts::actions::capabilities_of(user_id, &deps.db_pool).await?;
//! let ctx = RequestContext::new(user_id, caps);
//! ctx.require(RoleKind::Employer)?;
//! ```
//!
//! Ownership checks (owning employer, message sender, notification
//! recipient) happen in the action layer against the loaded entity, before
//! the state-machine check runs.
mod capability;
mod context;

pub use capability::{CapabilitySet, RoleKind};
pub use context::RequestContext;
