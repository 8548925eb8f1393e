use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::{capitalize, tenths, NOT_AVAILABLE};

/// Types string used when the upstream document lists none.
pub const UNKNOWN_TYPES: &str = "Unknown";

/// Condensed view of one `pokemon/{name}` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSummary {
    /// Upstream id as received; `"N/A"` when the field is absent.
    pub id: Value,
    pub name: String,
    /// Meters, one decimal.
    pub height: String,
    /// Kilograms, one decimal.
    pub weight: String,
    /// Capitalized type names joined with `", "`.
    pub types: String,
}

impl PokemonSummary {
    /// Extract the summary from an upstream payload.
    ///
    /// Extraction is best-effort: a missing or malformed field degrades to its
    /// placeholder instead of failing the whole lookup. `requested_name` is the
    /// fallback when the payload carries no name.
    #[must_use]
    pub fn from_payload(requested_name: &str, payload: &Value) -> Self {
        let id = payload
            .get("id")
            .cloned()
            .unwrap_or_else(|| Value::String(NOT_AVAILABLE.to_string()));

        let name = payload
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(requested_name);

        let types: Vec<String> = payload
            .get("types")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| {
                        let type_name = entry
                            .get("type")
                            .and_then(|t| t.get("name"))
                            .and_then(Value::as_str)
                            .unwrap_or_default();
                        capitalize(type_name)
                    })
                    .collect()
            })
            .unwrap_or_default();

        let types = if types.is_empty() {
            UNKNOWN_TYPES.to_string()
        } else {
            types.join(", ")
        };

        Self {
            id,
            name: capitalize(name),
            height: tenths(payload.get("height")),
            weight: tenths(payload.get("weight")),
            types,
        }
    }
}

/// Random selection of members of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeQueryResult {
    #[serde(rename = "type")]
    pub type_name: String,
    pub total_available: usize,
    /// Requested count after clamping to `total_available`.
    pub requested: usize,
    pub pokemons: Vec<String>,
}

/// Structured failure returned in place of a [`TypeQueryResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
    pub pokemons: Vec<String>,
}

impl ErrorResult {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            pokemons: Vec::new(),
        }
    }
}

/// Member names listed in a `type/{name}` document, in upstream order.
/// Entries without a name are skipped.
pub fn type_members(payload: &Value) -> Vec<String> {
    payload
        .get("pokemon")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("pokemon")?.get("name")?.as_str())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
