use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const GET_POKEMON: &str = "get_pokemon";
pub const GET_RANDOM_POKEMONS_BY_TYPE: &str = "get_random_pokemons_by_type";

/// Sample size used when a caller omits `n`.
pub const DEFAULT_SAMPLE_SIZE: i64 = 5;

/// Definition of an MCP tool exposed to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Registry of all MCP tools served by this process.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Return the list of tool definitions for the MCP `tools/list` method.
    #[must_use]
    pub fn definitions() -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: GET_POKEMON.to_string(),
                description: "Get Pokemon information including height, weight, and types for a given Pokemon name. Returns a JSON object with id, name, height (m), weight (kg) and types.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "pokemon_name": {
                            "type": "string",
                            "description": "The name or ID of the Pokemon to look up"
                        }
                    },
                    "required": ["pokemon_name"]
                }),
            },
            ToolDefinition {
                name: GET_RANDOM_POKEMONS_BY_TYPE.to_string(),
                description: "Get n random Pokemons of a specified type. Returns a JSON object containing a list of Pokemon names of the specified type.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "type_name": {
                            "type": "string",
                            "description": "The type name (e.g., \"fire\", \"water\", \"grass\", \"electric\", etc.)"
                        },
                        "n": {
                            "type": "integer",
                            "description": "Number of random Pokemons to return",
                            "default": DEFAULT_SAMPLE_SIZE
                        }
                    },
                    "required": ["type_name"]
                }),
            },
        ]
    }
}
