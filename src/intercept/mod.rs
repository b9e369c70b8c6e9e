//! Request interception module
//!
//! The decision that makes the crate worth running: should this request be
//! answered with a terse 404 right now, or handed to the host's normal
//! processing? Configuration lives in [`InterceptConfig`], the decision in
//! [`evaluate`].

pub mod config;
pub mod evaluate;

// Re-export the public surface
pub use self::config::{default_message, derive_allow_list, InterceptConfig, PassthroughPredicate};
pub use self::evaluate::{evaluate, Outcome};
