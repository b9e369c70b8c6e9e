//! fast404 — answer static-asset misses before the host pipeline runs
//!
//! A content host that routes every URL through its full pipeline pays the
//! whole page-rendering cost just to say "not found" for a missing image.
//! This crate makes that decision up front: [`intercept::evaluate`] inspects
//! the raw request target against an [`intercept::InterceptConfig`] and
//! either hands control back to the host or answers immediately with a terse
//! 404 (or a configured status).
//!
//! The decision is a pure function with no ambient state. The binary shows
//! the intended integration: a hyper host that consults the interceptor
//! before any of its own routing or rendering.

pub mod config;
pub mod handler;
pub mod http;
pub mod intercept;
pub mod logger;
pub mod server;
