//! PokeAPI client
//!
//! Fetches API resources, consulting the shared [`ExpiringCache`] before
//! every request and filling it after every successful one.

use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::ExpiringCache;
use crate::error::Result;
use crate::models::{LocationArea, LocationPage, Pokemon};

/// Number of locations requested per `map` page
pub const LOCATION_PAGE_SIZE: u32 = 20;

/// A fetched resource plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    pub data: T,
    /// True when the body was served from the cache without a network call
    pub from_cache: bool,
}

impl<T> Fetched<T> {
    fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        Fetched {
            data: f(self.data),
            from_cache: self.from_cache,
        }
    }
}

/// Client for PokeAPI with a read-through response cache.
///
/// Cache keys are the full request URLs, so two spellings of the same
/// resource are cached separately.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http_client: Client,
    base_url: String,
    cache: Arc<ExpiringCache>,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` that shares `cache`.
    pub fn new(base_url: impl Into<String>, cache: Arc<ExpiringCache>) -> Self {
        Self::with_http_client(Client::new(), base_url, cache)
    }

    /// Creates a client with a preconfigured reqwest client.
    pub fn with_http_client(
        http_client: Client,
        base_url: impl Into<String>,
        cache: Arc<ExpiringCache>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            cache,
        }
    }

    // == URL Builders ==
    /// URL of the first page of locations.
    pub fn first_location_page_url(&self) -> String {
        format!(
            "{}/location?offset=0&limit={}",
            self.base_url, LOCATION_PAGE_SIZE
        )
    }

    pub fn location_area_url(&self, area: &str) -> String {
        format!("{}/location-area/{}/", self.base_url, area)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}/", self.base_url, name)
    }

    // == Fetch ==
    /// Returns the body at `url`, from the cache when possible.
    ///
    /// # Behavior
    /// - A cached body is returned as-is and no request is sent
    /// - Otherwise the URL is fetched; non-success statuses are errors
    /// - Successful bodies are added to the cache, replacing any older copy
    pub async fn fetch(&self, url: &str) -> Result<Fetched<Vec<u8>>> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, bytes = body.len(), "serving response from cache");
            return Ok(Fetched {
                data: body,
                from_cache: true,
            });
        }

        debug!(url, "fetching from network");
        let body = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec();

        self.cache.add(url, body.clone());

        Ok(Fetched {
            data: body,
            from_cache: false,
        })
    }

    /// Fetches `url` and decodes the body as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<Fetched<T>> {
        let fetched = self.fetch(url).await?;
        let data = serde_json::from_slice(&fetched.data)?;
        Ok(fetched.map(|_| data))
    }

    // == Typed Resources ==
    /// Fetches one page of locations by its absolute URL.
    pub async fn location_page(&self, url: &str) -> Result<Fetched<LocationPage>> {
        self.fetch_json(url).await
    }

    pub async fn location_area(&self, area: &str) -> Result<Fetched<LocationArea>> {
        self.fetch_json(&self.location_area_url(area)).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Fetched<Pokemon>> {
        self.fetch_json(&self.pokemon_url(name)).await
    }
}
