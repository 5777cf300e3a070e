mod apply;
mod cancel_interview;
mod evaluate_interview;
mod schedule_interview;
mod transition;
mod update_status;

pub use apply::apply;
pub use cancel_interview::cancel_interview;
pub use evaluate_interview::evaluate_interview;
pub use schedule_interview::schedule_interview;
pub use update_status::{update_application_status, withdraw};
