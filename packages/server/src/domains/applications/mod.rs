//! Application workflow and the embedded interview sub-workflow.

pub mod actions;
pub mod machines;
pub mod models;

pub use machines::{ApplicationStatus, InterviewResult, InterviewStatus};
pub use models::{Application, Interview};
