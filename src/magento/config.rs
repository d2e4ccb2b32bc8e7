//! Connection settings for the Magento asset module.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `MAGENTO_*` environment variables. The command line applies its own flags last.
//!
//! ```toml
//! url = "http://shop.example.com/index.php/api/v2_soap?wsdl"
//! username = "sitewhere"
//! password = "api-key"
//! debug_soap = false
//! workers = 5
//! timeout_secs = 30
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default SOAP v2 endpoint description.
pub const DEFAULT_URL: &str = "http://localhost/magento/index.php/api/v2_soap?wsdl";
pub const DEFAULT_USERNAME: &str = "magento";
pub const DEFAULT_PASSWORD: &str = "magento";
/// Number of concurrent calls made to Magento while caching.
pub const DEFAULT_WORKERS: usize = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagentoConfig {
    /// SOAP v2 (WS-I) endpoint, with or without the `?wsdl` suffix.
    pub url: String,
    pub username: String,
    /// API key of the Magento API user.
    pub password: String,
    /// Log every envelope sent and received at debug level.
    pub debug_soap: bool,
    pub workers: usize,
    pub timeout_secs: u64,
}

impl Default for MagentoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            debug_soap: false,
            workers: DEFAULT_WORKERS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl MagentoConfig {
    /// Load config from a TOML file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `MAGENTO_URL`, `MAGENTO_USERNAME`, `MAGENTO_PASSWORD`,
    /// `MAGENTO_DEBUG_SOAP` and `MAGENTO_WORKERS` from the process environment.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`with_env`](Self::with_env) with a custom variable lookup.
    pub fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(url) = lookup("MAGENTO_URL") {
            self.url = url;
        }
        if let Some(username) = lookup("MAGENTO_USERNAME") {
            self.username = username;
        }
        if let Some(password) = lookup("MAGENTO_PASSWORD") {
            self.password = password;
        }
        if let Some(value) = lookup("MAGENTO_DEBUG_SOAP") {
            self.debug_soap = parse_flag(&value).ok_or(ConfigError::InvalidVariable {
                name: "MAGENTO_DEBUG_SOAP",
                value,
            })?;
        }
        if let Some(value) = lookup("MAGENTO_WORKERS") {
            self.workers = value.trim().parse().map_err(|_| ConfigError::InvalidVariable {
                name: "MAGENTO_WORKERS",
                value,
            })?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::Invalid("url must not be empty".into()));
        }
        if self.workers == 0 {
            return Err(ConfigError::Invalid("workers must be at least 1".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = MagentoConfig::default();
        assert_eq!(config.url, "http://localhost/magento/index.php/api/v2_soap?wsdl");
        assert_eq!(config.username, "magento");
        assert_eq!(config.password, "magento");
        assert!(!config.debug_soap);
        assert_eq!(config.workers, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = MagentoConfig::from_toml("username = \"sitewhere\"\nworkers = 8\n").unwrap();
        assert_eq!(config.username, "sitewhere");
        assert_eq!(config.workers, 8);
        assert_eq!(config.password, DEFAULT_PASSWORD);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "url = \"http://shop/api/v2_soap?wsdl\"\ndebug_soap = true").unwrap();

        let config = MagentoConfig::load(file.path()).unwrap();
        assert_eq!(config.url, "http://shop/api/v2_soap?wsdl");
        assert!(config.debug_soap);
    }

    #[test]
    fn test_missing_file() {
        let err = MagentoConfig::load("/nonexistent/magento.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("MAGENTO_PASSWORD", "key"),
            ("MAGENTO_DEBUG_SOAP", "yes"),
            ("MAGENTO_WORKERS", "2"),
        ]
        .into_iter()
        .collect();

        let config = MagentoConfig::default()
            .with_vars(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.password, "key");
        assert!(config.debug_soap);
        assert_eq!(config.workers, 2);
        assert_eq!(config.username, DEFAULT_USERNAME);
    }

    #[test]
    fn test_invalid_env_value() {
        let err = MagentoConfig::default()
            .with_vars(|name| (name == "MAGENTO_WORKERS").then(|| "many".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVariable { name: "MAGENTO_WORKERS", .. }));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = MagentoConfig { workers: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
