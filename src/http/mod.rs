//! HTTP protocol layer module
//!
//! Protocol-adjacent base functionality shared by the interceptor and the
//! demonstration host, decoupled from business logic.

pub mod ext_types;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_405_response, build_html_response, build_intercept_response, build_options_response,
};
