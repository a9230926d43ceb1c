//! Per-session state: the location cursor and the caught Pokémon.

use std::collections::BTreeMap;

use crate::models::{LocationPage, Pokemon};

// == Location Cursor ==
/// Pagination state for `map` and `mapb`.
///
/// Both links come straight from the most recently displayed page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationCursor {
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl LocationCursor {
    /// A cursor positioned before `first_page`.
    pub fn starting_at(first_page: impl Into<String>) -> Self {
        Self {
            next: Some(first_page.into()),
            previous: None,
        }
    }

    /// Moves the cursor to the links carried by `page`.
    pub fn advance(&mut self, page: &LocationPage) {
        self.next = page.next.clone().filter(|url| !url.is_empty());
        self.previous = page.previous.clone().filter(|url| !url.is_empty());
    }
}

// == Pokedex ==
/// Every Pokémon caught this session, keyed by API name.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch, replacing an earlier catch of the same species.
    pub fn record(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Caught Pokémon in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.caught.values()
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
