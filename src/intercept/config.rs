//! Interceptor configuration
//!
//! The explicit configuration object the decision logic runs against.
//! Everything is derived once at construction; `evaluate` never consults
//! mutable or ambient state.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use hyper::StatusCode;

use crate::config::InterceptSettings;
use crate::http::ext_types;

/// Predicate over the raw request target; returning `true` forces a
/// pass-through before the extension check runs.
pub type PassthroughPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Extensions that commonly appear in normal page URLs. Stripped from the
/// derived allow-list so page routes are never short-circuited, unless
/// explicitly re-added through `add_extensions`.
const PAGE_EXTENSIONS: &[&str] = &["html", "htm", "php"];

/// Immutable interceptor configuration
pub struct InterceptConfig {
    /// Lowercase extensions that short-circuit to an immediate response
    pub allow_list: HashSet<String>,
    /// Status emitted on interception
    pub status: StatusCode,
    /// Body emitted on interception
    pub message: String,
    /// Optional escape hatch consulted before the extension check
    pub force_passthrough: Option<PassthroughPredicate>,
}

impl InterceptConfig {
    /// Build the configuration from its config-file form.
    ///
    /// Fails on a status code outside the valid HTTP range, so a bad value
    /// stops the host at startup instead of surfacing per-request.
    pub fn from_settings(settings: &InterceptSettings) -> Result<Self, String> {
        let status = StatusCode::from_u16(settings.status_code)
            .map_err(|e| format!("Invalid intercept status code {}: {e}", settings.status_code))?;

        let message = settings
            .message
            .clone()
            .unwrap_or_else(|| default_message(status));

        let force_passthrough = if settings.passthrough_prefixes.is_empty() {
            None
        } else {
            let prefixes = settings.passthrough_prefixes.clone();
            let predicate: PassthroughPredicate =
                Arc::new(move |target: &str| prefixes.iter().any(|p| target.starts_with(p.as_str())));
            Some(predicate)
        };

        Ok(Self {
            allow_list: derive_allow_list(&settings.add_extensions, &settings.remove_extensions),
            status,
            message,
            force_passthrough,
        })
    }
}

impl Default for InterceptConfig {
    fn default() -> Self {
        let status = StatusCode::NOT_FOUND;
        Self {
            allow_list: derive_allow_list(&[], &[]),
            status,
            message: default_message(status),
            force_passthrough: None,
        }
    }
}

impl fmt::Debug for InterceptConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptConfig")
            .field("allow_list", &self.allow_list)
            .field("status", &self.status)
            .field("message", &self.message)
            .field("force_passthrough", &self.force_passthrough.is_some())
            .finish()
    }
}

/// Derive the extension allow-list from the category table.
///
/// Flattens every category, strips the page extensions by value, applies
/// configured removals, then additions. Additions run last so a page
/// extension can be deliberately re-added.
pub fn derive_allow_list(add: &[String], remove: &[String]) -> HashSet<String> {
    let mut list: HashSet<String> = ext_types::flatten().map(str::to_owned).collect();

    for ext in PAGE_EXTENSIONS {
        list.remove(*ext);
    }
    for ext in remove {
        list.remove(&ext.to_ascii_lowercase());
    }
    for ext in add {
        list.insert(ext.trim_start_matches('.').to_ascii_lowercase());
    }

    list
}

/// Default interception body: the status code followed by its canonical
/// reason phrase, e.g. `404 Not Found`.
pub fn default_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}
