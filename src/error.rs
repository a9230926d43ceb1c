//! Error types for the Pokédex
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while constructing an [`ExpiringCache`](crate::cache::ExpiringCache).
///
/// Cache reads and writes themselves never fail; a miss is `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The expiration interval was zero
    #[error("Cache interval must be greater than zero")]
    InvalidInterval,

    /// No Tokio runtime to host the sweep task
    #[error("Cache must be created inside a Tokio runtime")]
    NoRuntime,
}

// == Pokedex Error Enum ==
/// Unified error type for the Pokédex application.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Network failure or non-success HTTP status
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Terminal input or output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Cache could not be created
    #[error(transparent)]
    Cache(#[from] CacheError),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokédex.
pub type Result<T> = std::result::Result<T, PokedexError>;
