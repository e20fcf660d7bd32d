//! Request handler module
//!
//! Responsible for request routing dispatch and the site's three
//! operations: landing page, contact acknowledgment and schedule redirect.

pub mod contact;
pub mod pages;
pub mod router;
pub mod schedule;

// Re-export main entry point
pub use router::handle_request;
