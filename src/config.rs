//! Configuration Module
//!
//! Handles loading the Pokédex settings from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{PokedexError, Result};

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults, and overridden again from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache entry lifetime and sweep period
    pub cache_interval: Duration,
    /// PokeAPI root URL, without a trailing slash
    pub base_url: String,
    /// Pause between the suspense dots of a catch attempt
    pub catch_delay: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL` - Cache interval in seconds (default: 300)
    /// - `POKEAPI_BASE_URL` - API root URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CATCH_DELAY_MS` - Catch animation delay in ms (default: 500)
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            cache_interval: lookup("POKEDEX_CACHE_INTERVAL")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_interval),
            base_url: lookup("POKEAPI_BASE_URL")
                .map(|v| normalize_base_url(&v))
                .unwrap_or(defaults.base_url),
            catch_delay: lookup("POKEDEX_CATCH_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.catch_delay),
        }
    }

    /// Rejects settings the application cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.cache_interval.is_zero() {
            return Err(PokedexError::Config(
                "cache interval must be at least one second".to_string(),
            ));
        }
        if self.base_url.is_empty() {
            return Err(PokedexError::Config("base URL must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: Duration::from_secs(300),
            base_url: DEFAULT_BASE_URL.to_string(),
            catch_delay: Duration::from_millis(500),
        }
    }
}

/// Trims whitespace and any trailing slashes from a base URL.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
