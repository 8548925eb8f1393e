//! Tool implementations.
//!
//! Every upstream failure is absorbed here and turned into text; callers
//! inspect [`ToolOutput::is_error`] rather than receiving an `Err`.

use rand::seq::SliceRandom;

use pokedex_core::error::Error;
use pokedex_core::format::capitalize;
use pokedex_core::traits::PokemonApi;
use pokedex_core::types::{type_members, ErrorResult, PokemonSummary, TypeQueryResult};

/// Text produced by a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Look up one Pokemon and return its summary as JSON.
///
/// Failures come back as plain sentences, not JSON.
pub async fn get_pokemon(api: &dyn PokemonApi, pokemon_name: &str) -> ToolOutput {
    let payload = match api.pokemon(&pokemon_name.to_lowercase()).await {
        Ok(payload) => payload,
        Err(err) => return pokemon_failure(pokemon_name, &err),
    };

    let summary = PokemonSummary::from_payload(pokemon_name, &payload);
    match serde_json::to_string(&summary) {
        Ok(text) => ToolOutput::ok(text),
        Err(e) => pokemon_failure(pokemon_name, &Error::Unexpected(e.to_string())),
    }
}

/// Pick up to `n` distinct random members of a type.
///
/// Every outcome, including failures, is a JSON document; failures use the
/// [`ErrorResult`] shape.
pub async fn get_random_pokemons_by_type(
    api: &dyn PokemonApi,
    type_name: &str,
    n: i64,
) -> ToolOutput {
    let members = match api.pokemon_type(&type_name.to_lowercase()).await {
        Ok(payload) => type_members(&payload),
        Err(err) => return type_failure(type_name, &err),
    };

    if members.is_empty() {
        return error_result(format!("No Pokemons found for type '{type_name}'"));
    }

    let result = match sample(type_name, &members, n) {
        Ok(result) => result,
        Err(err) => return type_failure(type_name, &err),
    };

    match serde_json::to_string(&result) {
        Ok(text) => ToolOutput::ok(text),
        Err(e) => type_failure(type_name, &Error::Unexpected(e.to_string())),
    }
}

fn sample(type_name: &str, members: &[String], n: i64) -> Result<TypeQueryResult, Error> {
    let requested = usize::try_from(n)
        .map_err(|_| {
            Error::Unexpected("Sample larger than population or is negative".to_string())
        })?
        .min(members.len());

    let pokemons = members
        .choose_multiple(&mut rand::thread_rng(), requested)
        .cloned()
        .collect();

    Ok(TypeQueryResult {
        type_name: capitalize(type_name),
        total_available: members.len(),
        requested,
        pokemons,
    })
}

fn pokemon_failure(pokemon_name: &str, err: &Error) -> ToolOutput {
    tracing::warn!("get_pokemon({pokemon_name}) failed: {err}");
    let text = match err {
        Error::NotFound => format!(
            "Error: Pokemon '{pokemon_name}' not found. Please check the spelling and try again."
        ),
        Error::Status(code) => format!("Error fetching Pokemon data: HTTP {code}"),
        Error::Transport(msg) => format!("Error fetching Pokemon data: {msg}"),
        Error::Unexpected(msg) => format!("An error occurred: {msg}"),
    };
    ToolOutput::error(text)
}

fn type_failure(type_name: &str, err: &Error) -> ToolOutput {
    tracing::warn!("get_random_pokemons_by_type({type_name}) failed: {err}");
    let text = match err {
        Error::NotFound => {
            format!("Type '{type_name}' not found. Please check the spelling and try again.")
        }
        Error::Status(code) => format!("Error fetching type data: HTTP {code}"),
        Error::Transport(msg) => format!("Error fetching type data: {msg}"),
        Error::Unexpected(msg) => format!("An error occurred: {msg}"),
    };
    error_result(text)
}

fn error_result(message: String) -> ToolOutput {
    let payload = ErrorResult::new(message);
    // Only string fields: serialization cannot fail.
    ToolOutput::error(serde_json::to_string(&payload).unwrap_or_default())
}
