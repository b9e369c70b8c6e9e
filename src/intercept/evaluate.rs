//! Interception decision
//!
//! A pure evaluation of a raw request target against an [`InterceptConfig`].
//! No I/O, no ambient state: the same target and configuration always
//! produce the same outcome.

use hyper::StatusCode;

use super::config::InterceptConfig;

/// Longest suffix still treated as a file extension
const MAX_EXT_LEN: usize = 8;

/// Result of evaluating one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// Hand control back to the host unchanged
    Passthrough,
    /// Answer immediately with the configured status and body
    Intercepted {
        status: StatusCode,
        body: &'a str,
    },
}

/// Decide whether a request should be short-circuited.
///
/// The force-pass-through predicate is consulted first, against the raw
/// target. Then the path component (query string and fragment discarded)
/// must end in an extension present in the allow-list; anything else is a
/// pass-through.
///
/// # Examples
/// ```
/// use fast404::intercept::{evaluate, InterceptConfig, Outcome};
///
/// let config = InterceptConfig::default();
/// assert!(matches!(
///     evaluate("/images/logo.png", &config),
///     Outcome::Intercepted { .. }
/// ));
/// assert_eq!(evaluate("/about.html", &config), Outcome::Passthrough);
/// assert_eq!(evaluate("/about", &config), Outcome::Passthrough);
/// ```
pub fn evaluate<'a>(request_target: &str, config: &'a InterceptConfig) -> Outcome<'a> {
    if let Some(predicate) = &config.force_passthrough {
        if predicate(request_target) {
            return Outcome::Passthrough;
        }
    }

    match path_extension(path_component(request_target)) {
        Some(ext) if config.allow_list.contains(&ext) => Outcome::Intercepted {
            status: config.status,
            body: &config.message,
        },
        _ => Outcome::Passthrough,
    }
}

/// Strip the query string and fragment from a raw request target
fn path_component(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    &target[..end]
}

/// Derive the lowercase extension of the final path segment.
///
/// Suffix-based: the part after the last `.`, required to look like a file
/// extension (ASCII alphanumeric, bounded length, non-empty stem). Dotfiles
/// and trailing dots yield `None`.
fn path_extension(path: &str) -> Option<String> {
    let segment = path.rsplit('/').next().unwrap_or(path);
    let (stem, ext) = segment.rsplit_once('.')?;

    if stem.is_empty() || ext.is_empty() || ext.len() > MAX_EXT_LEN {
        return None;
    }
    if !ext.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intercept::config::default_message;
    use std::sync::Arc;

    #[test]
    fn test_allow_listed_extension_intercepts() {
        let config = InterceptConfig::default();
        assert_eq!(
            evaluate("/images/logo.png", &config),
            Outcome::Intercepted {
                status: StatusCode::NOT_FOUND,
                body: "404 Not Found",
            }
        );
    }

    #[test]
    fn test_page_extensions_pass_through_by_default() {
        let config = InterceptConfig::default();
        assert_eq!(evaluate("/about.html", &config), Outcome::Passthrough);
        assert_eq!(evaluate("/legacy.htm", &config), Outcome::Passthrough);
        assert_eq!(evaluate("/index.php", &config), Outcome::Passthrough);
    }

    #[test]
    fn test_readded_page_extension_intercepts() {
        let mut config = InterceptConfig::default();
        config.allow_list.insert("html".to_string());
        assert!(matches!(
            evaluate("/about.html", &config),
            Outcome::Intercepted { .. }
        ));
    }

    #[test]
    fn test_extensionless_paths_pass_through() {
        let config = InterceptConfig::default();
        assert_eq!(evaluate("/about", &config), Outcome::Passthrough);
        assert_eq!(evaluate("/", &config), Outcome::Passthrough);
        assert_eq!(evaluate("", &config), Outcome::Passthrough);
        assert_eq!(evaluate("/blog/2024/", &config), Outcome::Passthrough);
    }

    #[test]
    fn test_query_and_fragment_discarded() {
        let config = InterceptConfig::default();
        assert!(matches!(
            evaluate("/logo.png?v=2", &config),
            Outcome::Intercepted { .. }
        ));
        assert!(matches!(
            evaluate("/logo.png#section", &config),
            Outcome::Intercepted { .. }
        ));
        // An extension inside the query string is not a path extension
        assert_eq!(
            evaluate("/download?file=archive.zip", &config),
            Outcome::Passthrough
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let config = InterceptConfig::default();
        assert!(matches!(
            evaluate("/assets/LOGO.PNG", &config),
            Outcome::Intercepted { .. }
        ));
    }

    #[test]
    fn test_multi_dot_names_use_final_suffix() {
        let config = InterceptConfig::default();
        // gz is in the archive category
        assert!(matches!(
            evaluate("/backups/site.tar.gz", &config),
            Outcome::Intercepted { .. }
        ));
    }

    #[test]
    fn test_dotfiles_and_trailing_dots_pass_through() {
        let mut config = InterceptConfig::default();
        config.allow_list.insert("env".to_string());
        // Hidden-file names are not extensions
        assert_eq!(evaluate("/.env", &config), Outcome::Passthrough);
        assert!(matches!(
            evaluate("/config.env", &config),
            Outcome::Intercepted { .. }
        ));
        assert_eq!(evaluate("/file.", &config), Outcome::Passthrough);
    }

    #[test]
    fn test_non_extension_suffixes_pass_through() {
        let config = InterceptConfig::default();
        assert_eq!(evaluate("/v1.0-beta", &config), Outcome::Passthrough);
        assert_eq!(evaluate("/release.candidate1x", &config), Outcome::Passthrough);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let config = InterceptConfig::default();
        for target in ["/images/logo.png", "/about.html", "/about"] {
            assert_eq!(evaluate(target, &config), evaluate(target, &config));
        }
    }

    #[test]
    fn test_force_passthrough_wins_over_match() {
        let mut config = InterceptConfig::default();
        config.force_passthrough = Some(Arc::new(|target| target.starts_with("/downloads/")));
        assert_eq!(
            evaluate("/downloads/file.zip", &config),
            Outcome::Passthrough
        );
        assert!(matches!(
            evaluate("/other/file.zip", &config),
            Outcome::Intercepted { .. }
        ));
    }

    #[test]
    fn test_status_override_applies() {
        let config = InterceptConfig {
            status: StatusCode::GONE,
            message: default_message(StatusCode::GONE),
            ..InterceptConfig::default()
        };
        assert_eq!(
            evaluate("/old/banner.jpg", &config),
            Outcome::Intercepted {
                status: StatusCode::GONE,
                body: "410 Gone",
            }
        );
    }

    #[test]
    fn test_path_extension_rules() {
        assert_eq!(path_extension("/a/b/logo.png"), Some("png".to_string()));
        assert_eq!(path_extension("/a.b/page"), None);
        assert_eq!(path_extension("/archive.7z"), Some("7z".to_string()));
        assert_eq!(path_extension("/.htaccess"), None);
        assert_eq!(path_extension("/noext"), None);
    }
}
