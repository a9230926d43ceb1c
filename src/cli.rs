//! Command-line interface parsing for the Pokédex
//!
//! Flags given on the command line take precedence over the environment.

use std::time::Duration;

use clap::Parser;

use crate::config::{normalize_base_url, Config};
use crate::error::Result;

/// Pokédex - explore the Pokémon world from your terminal
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokédex backed by PokeAPI")]
#[command(version)]
pub struct Cli {
    /// Seconds a fetched API response stays cached
    #[arg(long, value_name = "SECS")]
    pub cache_interval: Option<u64>,

    /// PokeAPI root URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Milliseconds between the dots of a catch attempt
    #[arg(long, value_name = "MS")]
    pub catch_delay_ms: Option<u64>,
}

impl Cli {
    /// Layers the command-line flags over `base` and validates the result.
    ///
    /// # Returns
    /// * `Ok(Config)` with every provided flag applied
    /// * `Err(PokedexError::Config)` if the merged settings are unusable
    pub fn resolve(&self, base: Config) -> Result<Config> {
        let mut config = base;
        if let Some(secs) = self.cache_interval {
            config.cache_interval = Duration::from_secs(secs);
        }
        if let Some(url) = &self.base_url {
            config.base_url = normalize_base_url(url);
        }
        if let Some(ms) = self.catch_delay_ms {
            config.catch_delay = Duration::from_millis(ms);
        }
        config.validate()?;
        Ok(config)
    }
}
