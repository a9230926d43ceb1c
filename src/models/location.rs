//! Location list and location-area payloads

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// One page of `GET /location`.
///
/// `next` and `previous` are absolute URLs, or `null` at either end of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// `GET /location-area/{name}`, reduced to the Pokémon that can be met there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<Encounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}

impl LocationArea {
    /// Names of every Pokémon encountered in the area, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_has_null_previous() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city", "url": "https://pokeapi.co/api/v2/location/1/"},
                {"name": "eterna-city", "url": "https://pokeapi.co/api/v2/location/2/"}
            ]
        }"#;

        let page: LocationPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.count, 1089);
        assert!(page.previous.is_none());
        assert_eq!(
            page.next.as_deref(),
            Some("https://pokeapi.co/api/v2/location?offset=20&limit=20")
        );
        assert_eq!(page.results[1].name, "eterna-city");
    }

    #[test]
    fn test_location_area_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "encounter_method_rates": [],
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "u"}, "version_details": []},
                {"pokemon": {"name": "tentacruel", "url": "u"}, "version_details": []}
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(json).unwrap();

        assert_eq!(area.pokemon_names().collect::<Vec<_>>(), ["tentacool", "tentacruel"]);
    }

    #[test]
    fn test_location_area_without_encounters() {
        let area: LocationArea = serde_json::from_str(r#"{"name": "empty"}"#).unwrap();
        assert_eq!(area.pokemon_names().count(), 0);
    }
}
