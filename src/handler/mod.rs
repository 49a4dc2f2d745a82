//! Request handler module
//!
//! Routing dispatch between the page renderer and the asset provider.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
