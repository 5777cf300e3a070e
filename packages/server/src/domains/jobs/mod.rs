//! Job postings, reduced to the ownership and visibility facts the
//! application workflow depends on.

pub mod models;

pub use models::JobPosting;
