//! Pokémon payloads

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// `GET /pokemon/{name}`, reduced to what `inspect` shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Missing for some alternate forms
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub stat: NamedResource,
    pub base_stat: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pokemon() {
        let json = r#"{
            "name": "pidgey",
            "base_experience": 50,
            "height": 3,
            "weight": 18,
            "abilities": [],
            "stats": [
                {"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": "u"}},
                {"base_stat": 45, "effort": 0, "stat": {"name": "attack", "url": "u"}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "normal", "url": "u"}},
                {"slot": 2, "type": {"name": "flying", "url": "u"}}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.name, "pidgey");
        assert_eq!(pokemon.base_experience, Some(50));
        assert_eq!(pokemon.height, 3);
        assert_eq!(pokemon.weight, 18);
        assert_eq!(pokemon.stats[1].stat.name, "attack");
        assert_eq!(pokemon.stats[1].base_stat, 45);
        assert_eq!(pokemon.types[1].kind.name, "flying");
    }

    #[test]
    fn test_decode_pokemon_null_base_experience() {
        let json = r#"{"name": "pikachu-cosplay", "base_experience": null, "height": 4, "weight": 60}"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert!(pokemon.base_experience.is_none());
        assert!(pokemon.stats.is_empty());
    }
}
