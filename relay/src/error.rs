//! Unified error types for the relay
//!
//! This module defines error types for each layer:
//! - `ConfigError`: Environment configuration errors
//! - `FeedError`: Reddit API client errors
//! - `WebhookError`: Discord webhook client errors
//! - `RelayError`: Main loop errors (wraps the others, always fatal)

use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

/// Reddit API client errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Unauthorized - access token rejected")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Discord webhook client errors
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Webhook rejected payload: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that stop the relay
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Feed session error: {0}")]
    Session(#[from] FeedError),

    #[error("Feed r/{community} has no posts to start from")]
    EmptyFeed { community: String },

    #[error("Delivery error: {0}")]
    Delivery(#[from] WebhookError),

    #[error("Relay polled before start")]
    NotStarted,
}
