//! Error types for SKY Dost.

use std::time::Duration;

/// Top-level error type for the service binary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Errors raised while talking to a single chat-completion provider.
///
/// These never reach the HTTP caller: the dispatcher absorbs them and moves
/// on to the next provider in priority order.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for provider {provider} (HTTP {status})")]
    AuthFailed { provider: String, status: u16 },

    #[error("Provider {provider} rate limited")]
    RateLimited { provider: String },

    #[error("Provider {provider} rejected the request: {body}")]
    BadRequest { provider: String, body: String },

    #[error("Provider {provider} returned HTTP {status}: {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Provider {provider} request failed: {reason}")]
    Transport { provider: String, reason: String },

    #[error("Provider {provider} timed out after {timeout:?}")]
    Timeout { provider: String, timeout: Duration },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

/// Errors visible to the chat caller.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("No message provided")]
    EmptyMessage,
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
