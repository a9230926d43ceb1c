//! API Module
//!
//! Cache-aware HTTP access to PokeAPI.
//!
//! # Endpoints used
//! - `GET /location?offset=&limit=` - Paged list of locations
//! - `GET /location-area/{name}/` - Pokémon encounters in an area
//! - `GET /pokemon/{name}/` - A single Pokémon

pub mod client;

pub use client::{Fetched, PokeApiClient, LOCATION_PAGE_SIZE};
