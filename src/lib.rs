//! Pokédex - an interactive explorer for PokeAPI
//!
//! Responses are kept in an in-memory cache whose entries expire after a
//! fixed interval, swept by a background task the cache owns.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::ExpiringCache;
pub use config::Config;
pub use error::{CacheError, PokedexError, Result};
pub use repl::Repl;
