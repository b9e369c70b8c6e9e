// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    #[serde(default)]
    pub intercept: InterceptSettings,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub enable_cors: bool,
}

/// Interceptor settings as they appear in the config file.
///
/// The derived runtime form lives in `intercept::InterceptConfig`; this is
/// only the serializable shape.
#[derive(Debug, Deserialize, Clone)]
pub struct InterceptSettings {
    /// Status emitted for intercepted requests
    #[serde(default = "default_status_code")]
    pub status_code: u16,
    /// Body override; defaults to "<code> <reason>" when unset
    #[serde(default)]
    pub message: Option<String>,
    /// Extensions added to the derived allow-list (applied last, so page
    /// extensions can be re-added)
    #[serde(default)]
    pub add_extensions: Vec<String>,
    /// Extensions removed from the derived allow-list
    #[serde(default)]
    pub remove_extensions: Vec<String>,
    /// Request targets starting with any of these prefixes always pass
    /// through, matching extension or not
    #[serde(default)]
    pub passthrough_prefixes: Vec<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_status_code() -> u16 {
    404
}

impl Default for InterceptSettings {
    fn default() -> Self {
        Self {
            status_code: default_status_code(),
            message: None,
            add_extensions: Vec::new(),
            remove_extensions: Vec::new(),
            passthrough_prefixes: Vec::new(),
        }
    }
}
