// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod error;
pub mod id;

pub use auth::{CapabilitySet, RequestContext, RoleKind};
pub use entity_ids::{
    ApplicationId, ConversationId, GrantId, Id, InterviewId, JobId, MessageId, NotificationId,
    UserId,
};
pub use error::{DomainError, DomainResult};
