//! Chat messaging: authoritative rows in Postgres, best-effort mirror in
//! the real-time store.

pub mod actions;
pub mod models;
pub mod replicator;

pub use models::{Conversation, Message};
pub use replicator::MessageReplicator;
