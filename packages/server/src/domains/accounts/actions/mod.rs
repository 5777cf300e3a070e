mod approve_role;
mod queries;
mod request_role;
mod set_active_role;

pub use approve_role::approve_role;
pub use queries::capabilities_of;
pub use request_role::request_role;
pub use set_active_role::set_active_role;
