//! PokeAPI payload models
//!
//! Deserialization targets for the JSON bodies returned by PokeAPI. Only the
//! fields the Pokédex displays are modelled; everything else is ignored.

pub mod location;
pub mod pokemon;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use location::{Encounter, LocationArea, LocationPage};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

/// A `{ name, url }` reference, the API's universal link shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}
