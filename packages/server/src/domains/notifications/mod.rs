//! Notification dispatcher: persisted per-user notifications, no delivery
//! transport.

pub mod actions;
pub mod models;

pub use models::{Notification, NotificationKind};
