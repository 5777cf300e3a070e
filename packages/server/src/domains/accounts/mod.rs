//! Role ledger, active-role selection and the admin approval workflow.

pub mod actions;
pub mod models;
