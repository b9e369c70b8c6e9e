// Application state module
// Immutable per-process state shared by all connections

use crate::config::types::Config;
use crate::intercept::InterceptConfig;

/// Application state
///
/// Built once at startup; per the injected-configuration design there is no
/// runtime mutation, so request handling needs no locks.
pub struct AppState {
    pub config: Config,
    pub intercept: InterceptConfig,
}

impl AppState {
    /// Build process-wide state, deriving the interceptor configuration once
    pub fn new(config: Config) -> Result<Self, String> {
        let intercept = InterceptConfig::from_settings(&config.intercept)?;
        Ok(Self { config, intercept })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_derives_intercept_config() {
        let mut config = Config::load_from("does-not-exist").unwrap();
        config.intercept.add_extensions = vec!["map".to_string()];
        let state = AppState::new(config).unwrap();
        assert!(state.intercept.allow_list.contains("map"));
        assert!(!state.intercept.allow_list.contains("html"));
    }

    #[test]
    fn test_state_rejects_bad_status_code() {
        let mut config = Config::load_from("does-not-exist").unwrap();
        config.intercept.status_code = 1000;
        assert!(AppState::new(config).is_err());
    }
}
