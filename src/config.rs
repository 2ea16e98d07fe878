use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::ClientError;

/// Environment variable that overrides the API base URL
pub const API_URL_ENV: &str = "REZEPT_API_URL";

/// Base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client configuration, resolved once at startup and passed to the API client
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the recipe service, without a trailing slash
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl ClientConfig {
    /// Create a configuration pointing at an explicit base URL
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. `REZEPT_API_URL`
    /// 2. Environment variables with REZEPT__ prefix (e.g. `REZEPT__API_URL`)
    /// 3. config.toml file in current directory
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Check that the base URL can be used to build request URLs
    pub fn validate(&self) -> Result<(), ClientError> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(ClientError::InvalidBaseUrl(
                "base URL cannot be empty".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidBaseUrl(format!(
                "{url} (expected an http:// or https:// URL)"
            )));
        }
        Ok(())
    }

    /// Join an API path onto the base URL
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Load configuration, honouring the `REZEPT_API_URL` override
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    load_config_with_override(std::env::var(API_URL_ENV).ok())
}

/// Load configuration with an explicit base URL override
///
/// Empty overrides are ignored so that `REZEPT_API_URL=` falls back to the
/// file, the prefixed environment, or the default.
pub fn load_config_with_override(api_url: Option<String>) -> Result<ClientConfig, ConfigError> {
    let api_url = api_url.filter(|url| !url.trim().is_empty());

    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: REZEPT__API_URL
        .add_source(
            Environment::with_prefix("REZEPT")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("api_url", api_url)?
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    const PREFIXED_API_URL_ENV: &str = "REZEPT__API_URL";

    // Tests that read or write the process environment take this lock
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Run `f` with both URL variables cleared, restoring them afterwards
    fn with_clean_env<T>(f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved: Vec<_> = [API_URL_ENV, PREFIXED_API_URL_ENV]
            .into_iter()
            .map(|name| (name, env::var(name).ok()))
            .collect();
        for (name, _) in &saved {
            env::remove_var(name);
        }

        let result = f();

        for (name, value) in saved {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
        result
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_api_url(), "http://localhost:8000");
        assert_eq!(ClientConfig::default().api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_no_override_uses_default() {
        let config = with_clean_env(|| load_config_with_override(None)).unwrap();
        assert_eq!(config.api_url, "http://localhost:8000");
    }

    #[test]
    fn test_override_wins() {
        let config = with_clean_env(|| {
            env::set_var(PREFIXED_API_URL_ENV, "http://prefixed.example");
            load_config_with_override(Some("http://recipes.example:9000".to_string()))
        })
        .unwrap();
        assert_eq!(config.api_url, "http://recipes.example:9000");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let config =
            with_clean_env(|| load_config_with_override(Some("   ".to_string()))).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_load_config_reads_api_url_env() {
        let config = with_clean_env(|| {
            env::set_var(API_URL_ENV, "https://rezepte.example");
            load_config()
        })
        .unwrap();
        assert_eq!(config.api_url, "https://rezepte.example");
    }

    #[test]
    fn test_load_config_ignores_empty_api_url_env() {
        let config = with_clean_env(|| {
            env::set_var(API_URL_ENV, "");
            load_config()
        })
        .unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_prefixed_env_layer() {
        let config = with_clean_env(|| {
            env::set_var(PREFIXED_API_URL_ENV, "http://prefixed.example:8080");
            load_config_with_override(None)
        })
        .unwrap();
        assert_eq!(config.api_url, "http://prefixed.example:8080");

        // The unprefixed override sits above the prefixed layer
        let config = with_clean_env(|| {
            env::set_var(PREFIXED_API_URL_ENV, "http://prefixed.example:8080");
            env::set_var(API_URL_ENV, "http://direct.example");
            load_config()
        })
        .unwrap();
        assert_eq!(config.api_url, "http://direct.example");
    }

    #[test]
    fn test_endpoint_url_joins_slashes() {
        let config = ClientConfig::new("http://localhost:8000/");
        assert_eq!(
            config.endpoint_url("/api/recipes"),
            "http://localhost:8000/api/recipes"
        );
        let config = ClientConfig::new("http://localhost:8000");
        assert_eq!(
            config.endpoint_url("api/recipes/3"),
            "http://localhost:8000/api/recipes/3"
        );
    }

    #[test]
    fn test_validate() {
        assert!(ClientConfig::new("http://localhost:8000").validate().is_ok());
        assert!(ClientConfig::new("https://rezepte.example").validate().is_ok());
        assert!(ClientConfig::new("").validate().is_err());
        assert!(ClientConfig::new("localhost:8000").validate().is_err());
    }
}
