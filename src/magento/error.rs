//! Error types for the Magento asset module.

use thiserror::Error;

use crate::framework::FrameworkError;
use crate::soap::SoapError;

/// Errors that can occur while loading or serving Magento assets.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MagentoError {
    /// Magento rejected the configured credentials.
    #[error("Magento login failed.")]
    LoginFailed(#[source] SoapError),

    /// The module has not been started yet.
    #[error("Magento asset module is not started")]
    NotStarted,

    /// No Magento session is open.
    #[error("No Magento session, log in first")]
    NotLoggedIn,

    /// A product's attribute set id is not a number.
    #[error("Product {product_id} has invalid attribute set '{set}'")]
    InvalidAttributeSet { product_id: String, set: String },

    /// A Magento call failed.
    #[error(transparent)]
    Soap(#[from] SoapError),

    /// The asset cache could not be reached.
    #[error("Asset cache error: {0}")]
    Cache(#[from] FrameworkError),

    /// A loader task panicked or was cancelled.
    #[error("Loader task failed: {0}")]
    Task(String),
}

impl From<String> for MagentoError {
    fn from(msg: String) -> Self {
        MagentoError::Task(msg)
    }
}

impl From<tokio::task::JoinError> for MagentoError {
    fn from(e: tokio::task::JoinError) -> Self {
        MagentoError::Task(e.to_string())
    }
}

/// Errors raised while building a [`MagentoConfig`](super::MagentoConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment variable holds a value of the wrong type.
    #[error("Invalid value '{value}' for {name}")]
    InvalidVariable { name: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
