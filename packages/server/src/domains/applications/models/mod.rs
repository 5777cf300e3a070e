mod application;
mod interview;

pub use application::Application;
pub use interview::{generate_meeting_ref, Interview};
