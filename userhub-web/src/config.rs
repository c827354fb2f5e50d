//! Frontend configuration module
//!
//! Values are baked in at compile time through `option_env!` so the same
//! bundle can be built for different deployments.

/// Default location of the identity service, relative to the page origin.
const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration for the identity service and local persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// Base URL of the identity service.
    pub api_base_url: String,
    /// Maximum level for `tracing` output in the browser console.
    pub log_level: String,
    /// `localStorage` key holding the bearer token.
    pub token_key: String,
    /// `localStorage` key holding the cached identity snapshot.
    pub identity_key: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("USERHUB_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            log_level: option_env!("USERHUB_LOG_LEVEL")
                .unwrap_or(DEFAULT_LOG_LEVEL)
                .to_string(),
            token_key: "token".to_string(),
            identity_key: "user".to_string(),
        }
    }
}

impl WebConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute API base URL. Relative bases are resolved against the page
    /// origin when running in a browser.
    pub fn resolved_api_base_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if !base.starts_with('/') {
            return base.to_string();
        }
        match page_origin() {
            Some(origin) => format!("{}{base}", origin.trim_end_matches('/')),
            None => base.to_string(),
        }
    }

    /// The configured log level as a `tracing` level, defaulting to `INFO`.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_config_defaults() {
        let config = WebConfig::new();
        assert!(!config.api_base_url.is_empty());
        assert_eq!(config.token_key, "token");
        assert_eq!(config.identity_key, "user");
    }

    #[test]
    fn test_absolute_base_url_is_kept() {
        let config = WebConfig {
            api_base_url: "https://id.example.com/api/".to_string(),
            ..WebConfig::default()
        };
        assert_eq!(config.resolved_api_base_url(), "https://id.example.com/api");
    }

    #[test]
    fn test_relative_base_url_without_browser() {
        let config = WebConfig {
            api_base_url: "/api".to_string(),
            ..WebConfig::default()
        };
        assert_eq!(config.resolved_api_base_url(), "/api");
    }

    #[test]
    fn test_tracing_level_parsing() {
        let mut config = WebConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);

        config.log_level = "chatty".to_string();
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }
}
