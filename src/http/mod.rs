//! HTTP protocol layer module
//!
//! Response builders and content-type inference, decoupled from the
//! routing and asset logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_500_response, build_asset_response,
    build_html_response,
};
