use serde::{Deserialize, Serialize};

use crate::tools::GET_POKEMON;

pub const COMPARE_POKEMON: &str = "compare_pokemon";

/// Definition of an MCP prompt template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptDefinition {
    pub name: String,
    pub description: String,
    pub arguments: Vec<PromptArgument>,
}

/// A named prompt parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptArgument {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Registry of all MCP prompts served by this process.
pub struct PromptRegistry;

impl PromptRegistry {
    /// Return the list of prompt definitions for the MCP `prompts/list` method.
    #[must_use]
    pub fn definitions() -> Vec<PromptDefinition> {
        vec![PromptDefinition {
            name: COMPARE_POKEMON.to_string(),
            description: "Compare two Pokemon by their types and stats.".to_string(),
            arguments: vec![
                PromptArgument {
                    name: "pokemon1_name".to_string(),
                    description: "First Pokemon to compare".to_string(),
                    required: true,
                },
                PromptArgument {
                    name: "pokemon2_name".to_string(),
                    description: "Second Pokemon to compare".to_string(),
                    required: true,
                },
            ],
        }]
    }
}

/// Instruction text asking the model to look up and compare two Pokemon.
pub fn compare_pokemon(pokemon1_name: &str, pokemon2_name: &str) -> String {
    format!(
        "Use the {GET_POKEMON} tool to get the stats of pokemons {pokemon1_name} and {pokemon2_name}.\n\
         Compare their types and stats.\n\
         \n\
         Mention which would have an advantage in a fight based on their types.\n"
    )
}
