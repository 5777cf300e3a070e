// Business domains
pub mod accounts;
pub mod applications;
pub mod jobs;
pub mod messaging;
pub mod notifications;
