mod role_grant;
mod user;

pub use role_grant::RoleGrant;
pub use user::User;
