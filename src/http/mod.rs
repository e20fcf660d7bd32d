//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the
//! site's business logic: response builders and form body decoding.

pub mod form;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_413_response, build_health_response,
    build_html_response, build_options_response, build_redirect_response, json_response,
};
