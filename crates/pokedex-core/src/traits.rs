use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;

/// Read-only access to the upstream Pokemon data service.
///
/// Implementations return the raw JSON document; field extraction is the
/// caller's concern. Names are passed through exactly as given.
#[async_trait]
pub trait PokemonApi: Send + Sync {
    /// Fetch the `pokemon/{name}` document.
    async fn pokemon(&self, name: &str) -> Result<Value, Error>;

    /// Fetch the `type/{name}` document.
    async fn pokemon_type(&self, type_name: &str) -> Result<Value, Error>;
}
