//! Typed ID definitions for all domain entities.
//!
//! Each alias pins `Id<T>` to an entity marker so IDs cannot be mixed up at
//! compile time.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for User entities.
pub struct User;

/// Marker type for RoleGrant entities.
pub struct RoleGrant;

/// Marker type for JobPosting entities.
pub struct JobPosting;

/// Marker type for Application entities.
pub struct Application;

/// Marker type for Interview entities.
pub struct Interview;

/// Marker type for Notification entities.
pub struct Notification;

/// Marker type for Conversation entities.
pub struct Conversation;

/// Marker type for Message entities.
pub struct Message;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for RoleGrant entities.
pub type GrantId = Id<RoleGrant>;

/// Typed ID for JobPosting entities.
pub type JobId = Id<JobPosting>;

/// Typed ID for Application entities.
pub type ApplicationId = Id<Application>;

/// Typed ID for Interview entities.
pub type InterviewId = Id<Interview>;

/// Typed ID for Notification entities.
pub type NotificationId = Id<Notification>;

/// Typed ID for Conversation entities.
pub type ConversationId = Id<Conversation>;

/// Typed ID for Message entities.
pub type MessageId = Id<Message>;
