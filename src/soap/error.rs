//! Error types for the SOAP layer.

use thiserror::Error;

/// Errors raised while exchanging envelopes with Magento.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SoapError {
    /// Magento answered with a SOAP fault.
    #[error("SOAP fault [{code}]: {message}")]
    Fault { code: String, message: String },

    /// The reply envelope has no element inside `Body`.
    #[error("SOAP reply has no body element")]
    MissingBody,

    #[error("Unable to encode request: {0}")]
    Encode(String),

    #[error("Unable to decode reply: {0}")]
    Decode(String),

    /// The request never produced a reply (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status without a readable fault.
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
}

impl SoapError {
    pub fn is_fault(&self) -> bool {
        matches!(self, SoapError::Fault { .. })
    }
}

impl From<reqwest::Error> for SoapError {
    fn from(e: reqwest::Error) -> Self {
        SoapError::Transport(e.to_string())
    }
}
