// Recruitment Platform - Backend Core
//
// This crate implements the workflow engine for the recruitment platform:
// role grants and approval, the application/interview state machines with
// their notification side effects, and chat message replication into the
// real-time mirror store.
//
// HTTP routing, serialization boilerplate, file uploads and token issuance
// live outside this crate; everything here is request-scoped library code
// operating on the primary Postgres store plus the mirror.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
