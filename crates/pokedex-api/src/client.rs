use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use pokedex_core::error::Error;
use pokedex_core::traits::PokemonApi;

/// Public PokeAPI root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// HTTP implementation of [`PokemonApi`] against PokeAPI.
///
/// Uses the client's defaults: no timeout, no retries.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client rooted at `base_url` (e.g. [`DEFAULT_BASE_URL`]).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, resource: &str, name: &str) -> Result<Value, Error> {
        let url = format!("{}/{resource}/{name}/", self.base_url);
        tracing::debug!("GET {url}");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound);
        }
        if status.is_client_error() || status.is_server_error() {
            return Err(Error::Status(status.as_u16()));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| Error::Unexpected(e.to_string()))
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl PokemonApi for PokeApiClient {
    async fn pokemon(&self, name: &str) -> Result<Value, Error> {
        self.fetch("pokemon", name).await
    }

    async fn pokemon_type(&self, type_name: &str) -> Result<Value, Error> {
        self.fetch("type", type_name).await
    }
}
