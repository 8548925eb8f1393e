use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use pokedex_core::traits::PokemonApi;

use crate::handlers::{self, ToolOutput};
use crate::jsonrpc::{INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};
use crate::prompts::{self, PromptRegistry, COMPARE_POKEMON};
use crate::tools::{ToolRegistry, DEFAULT_SAMPLE_SIZE, GET_POKEMON, GET_RANDOM_POKEMONS_BY_TYPE};
use crate::{JsonRpcRequest, JsonRpcResponse};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "Pokemon Server";

#[derive(Deserialize)]
struct GetPokemonArgs {
    pokemon_name: String,
}

#[derive(Deserialize)]
struct RandomByTypeArgs {
    type_name: String,
    #[serde(default = "default_sample_size")]
    n: i64,
}

fn default_sample_size() -> i64 {
    DEFAULT_SAMPLE_SIZE
}

#[derive(Deserialize)]
struct ComparePokemonArgs {
    pokemon1_name: String,
    pokemon2_name: String,
}

/// Routes MCP JSON-RPC requests to the tool handlers and prompt templates.
///
/// Transport-agnostic: stdio and HTTP front-ends both hand requests here.
#[derive(Clone)]
pub struct McpService {
    api: Arc<dyn PokemonApi>,
}

impl McpService {
    #[must_use]
    pub fn new(api: Arc<dyn PokemonApi>) -> Self {
        Self { api }
    }

    /// Parse and handle one raw JSON-RPC message.
    ///
    /// Unparsable input yields a parse-error response with a null id; JSON
    /// that is not a request yields an invalid-request response that keeps
    /// the id when one is present.
    pub async fn handle_message(&self, raw: &[u8]) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_slice(raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Unparsable MCP message: {e}");
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(req) => self.handle(req).await,
            Err(e) => {
                tracing::warn!("Invalid MCP request: {e}");
                Some(JsonRpcResponse::error(
                    id,
                    INVALID_REQUEST,
                    format!("Invalid Request: {e}"),
                ))
            }
        }
    }

    /// Handle one request. Returns `None` for notifications.
    pub async fn handle(&self, req: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if req.is_notification() {
            tracing::debug!("Received MCP notification: {}", req.method);
            return None;
        }

        if req.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                req.id,
                INVALID_REQUEST,
                "Unsupported jsonrpc version",
            ));
        }

        let response = match req.method.as_str() {
            "initialize" => handle_initialize(&req),
            "ping" => JsonRpcResponse::success(req.id.clone(), serde_json::json!({})),
            "tools/list" => handle_tools_list(&req),
            "tools/call" => self.handle_tools_call(&req).await,
            "prompts/list" => handle_prompts_list(&req),
            "prompts/get" => handle_prompts_get(&req),
            _ => JsonRpcResponse::error(req.id, METHOD_NOT_FOUND, "Method not found"),
        };

        Some(response)
    }

    async fn handle_tools_call(&self, req: &JsonRpcRequest) -> JsonRpcResponse {
        let (name, arguments) = match named_call(req) {
            Ok(call) => call,
            Err(resp) => return resp,
        };

        tracing::info!("tools/call {name}");

        let output = match name.as_str() {
            GET_POKEMON => match parse_args::<GetPokemonArgs>(req, arguments) {
                Ok(args) => handlers::get_pokemon(self.api.as_ref(), &args.pokemon_name).await,
                Err(resp) => return resp,
            },
            GET_RANDOM_POKEMONS_BY_TYPE => match parse_args::<RandomByTypeArgs>(req, arguments) {
                Ok(args) => {
                    handlers::get_random_pokemons_by_type(self.api.as_ref(), &args.type_name, args.n)
                        .await
                }
                Err(resp) => return resp,
            },
            _ => {
                return JsonRpcResponse::error(
                    req.id.clone(),
                    INVALID_PARAMS,
                    format!("Unknown tool: {name}"),
                )
            }
        };

        JsonRpcResponse::success(req.id.clone(), tool_result(&output))
    }
}

fn handle_initialize(req: &JsonRpcRequest) -> JsonRpcResponse {
    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {},
                "prompts": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn handle_tools_list(req: &JsonRpcRequest) -> JsonRpcResponse {
    let tools = ToolRegistry::definitions();
    JsonRpcResponse::success(req.id.clone(), serde_json::json!({ "tools": tools }))
}

fn handle_prompts_list(req: &JsonRpcRequest) -> JsonRpcResponse {
    let prompts = PromptRegistry::definitions();
    JsonRpcResponse::success(req.id.clone(), serde_json::json!({ "prompts": prompts }))
}

fn handle_prompts_get(req: &JsonRpcRequest) -> JsonRpcResponse {
    let (name, arguments) = match named_call(req) {
        Ok(call) => call,
        Err(resp) => return resp,
    };

    if name != COMPARE_POKEMON {
        return JsonRpcResponse::error(
            req.id.clone(),
            INVALID_PARAMS,
            format!("Unknown prompt: {name}"),
        );
    }

    let args = match parse_args::<ComparePokemonArgs>(req, arguments) {
        Ok(args) => args,
        Err(resp) => return resp,
    };

    let text = prompts::compare_pokemon(&args.pokemon1_name, &args.pokemon2_name);
    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({
            "description": "Compare two Pokemon by their types and stats.",
            "messages": [{
                "role": "user",
                "content": {
                    "type": "text",
                    "text": text
                }
            }]
        }),
    )
}

/// Split `params` into the target `name` and its `arguments` object.
fn named_call(req: &JsonRpcRequest) -> Result<(String, Value), JsonRpcResponse> {
    let Some(params) = &req.params else {
        return Err(JsonRpcResponse::error(
            req.id.clone(),
            INVALID_PARAMS,
            "Missing params",
        ));
    };

    let name = params
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, "Missing 'name'"))?;

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(Value::Object(serde_json::Map::new()));

    Ok((name.to_string(), arguments))
}

fn parse_args<T: serde::de::DeserializeOwned>(
    req: &JsonRpcRequest,
    arguments: Value,
) -> Result<T, JsonRpcResponse> {
    serde_json::from_value(arguments).map_err(|e| {
        JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, format!("Invalid arguments: {e}"))
    })
}

fn tool_result(output: &ToolOutput) -> Value {
    serde_json::json!({
        "content": [{
            "type": "text",
            "text": output.text
        }],
        "isError": output.is_error
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handlers::tests::MockApi;

    fn service() -> (McpService, Arc<MockApi>) {
        let api = Arc::new(MockApi::with_fixtures());
        (McpService::new(api.clone()), api)
    }

    fn request(method: &str, params: Value) -> JsonRpcRequest {
        serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params
        }))
        .unwrap()
    }

    async fn call(service: &McpService, method: &str, params: Value) -> Value {
        let resp = service.handle(request(method, params)).await.unwrap();
        serde_json::to_value(resp).unwrap()
    }

    #[tokio::test]
    async fn initialize_advertises_tools_and_prompts() {
        let (service, _) = service();
        let body = call(&service, "initialize", json!({})).await;
        assert_eq!(body["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(body["result"]["serverInfo"]["name"], SERVER_NAME);
        assert!(body["result"]["capabilities"].get("tools").is_some());
        assert!(body["result"]["capabilities"].get("prompts").is_some());
    }

    #[tokio::test]
    async fn notification_gets_no_response() {
        let (service, _) = service();
        let req: JsonRpcRequest = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        }))
        .unwrap();
        assert!(service.handle(req).await.is_none());
    }

    #[tokio::test]
    async fn garbage_message_is_parse_error() {
        let (service, _) = service();
        let resp = service.handle_message(b"{not json").await.unwrap();
        assert!(resp.id.is_null());
        assert_eq!(resp.error.unwrap().code, PARSE_ERROR);
    }

    #[tokio::test]
    async fn message_without_method_is_invalid_request() {
        let (service, _) = service();
        let resp = service.handle_message(br#"{"jsonrpc":"2.0","id":1}"#).await.unwrap();
        assert_eq!(resp.id, json!(1));
        assert_eq!(resp.error.unwrap().code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn message_without_version_is_invalid_request() {
        let (service, _) = service();
        let resp = service
            .handle_message(br#"{"id":"x","method":"ping"}"#)
            .await
            .unwrap();
        assert_eq!(resp.id, json!("x"));
        assert_eq!(resp.error.unwrap().code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn non_object_message_is_invalid_request() {
        let (service, _) = service();
        let resp = service.handle_message(b"[1, 2]").await.unwrap();
        assert!(resp.id.is_null());
        assert_eq!(resp.error.unwrap().code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn raw_message_is_dispatched() {
        let (service, _) = service();
        let resp = service
            .handle_message(br#"{"jsonrpc":"2.0","id":9,"method":"tools/list"}"#)
            .await
            .unwrap();
        assert_eq!(resp.id, json!(9));
        assert!(resp.result.is_some());
    }

    #[tokio::test]
    async fn ping_returns_empty_object() {
        let (service, _) = service();
        let body = call(&service, "ping", Value::Null).await;
        assert_eq!(body["result"], json!({}));
    }

    #[tokio::test]
    async fn unknown_method() {
        let (service, _) = service();
        let body = call(&service, "resources/list", json!({})).await;
        assert_eq!(body["error"]["code"], METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_jsonrpc_version() {
        let (service, _) = service();
        let req: JsonRpcRequest = serde_json::from_value(json!({
            "jsonrpc": "1.0",
            "id": 3,
            "method": "ping"
        }))
        .unwrap();
        let resp = service.handle(req).await.unwrap();
        assert_eq!(resp.error.unwrap().code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn tools_list_has_both_tools() {
        let (service, _) = service();
        let body = call(&service, "tools/list", json!({})).await;
        let tools = body["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);
    }

    #[tokio::test]
    async fn tools_call_get_pokemon() {
        let (service, _) = service();
        let body = call(
            &service,
            "tools/call",
            json!({ "name": "get_pokemon", "arguments": { "pokemon_name": "Pikachu" } }),
        )
        .await;

        let result = &body["result"];
        assert_eq!(result["isError"], false);
        let text = result["content"][0]["text"].as_str().unwrap();
        let summary: Value = serde_json::from_str(text).unwrap();
        assert_eq!(summary["id"], 25);
    }

    #[tokio::test]
    async fn tools_call_failure_is_content_not_rpc_error() {
        let (service, _) = service();
        let body = call(
            &service,
            "tools/call",
            json!({ "name": "get_pokemon", "arguments": { "pokemon_name": "zzz" } }),
        )
        .await;

        assert!(body.get("error").is_none());
        assert_eq!(body["result"]["isError"], true);
        let text = body["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Error: Pokemon 'zzz' not found"));
    }

    #[tokio::test]
    async fn tools_call_random_defaults_to_five() {
        let (service, _) = service();
        let body = call(
            &service,
            "tools/call",
            json!({ "name": "get_random_pokemons_by_type", "arguments": { "type_name": "fire" } }),
        )
        .await;

        let text = body["result"]["content"][0]["text"].as_str().unwrap();
        let result: Value = serde_json::from_str(text).unwrap();
        assert_eq!(result["requested"], 5);
        assert_eq!(result["pokemons"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn tools_call_missing_argument() {
        let (service, api) = service();
        let body = call(
            &service,
            "tools/call",
            json!({ "name": "get_pokemon", "arguments": {} }),
        )
        .await;
        assert_eq!(body["error"]["code"], INVALID_PARAMS);
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn tools_call_non_integer_count() {
        let (service, _) = service();
        let body = call(
            &service,
            "tools/call",
            json!({
                "name": "get_random_pokemons_by_type",
                "arguments": { "type_name": "fire", "n": "three" }
            }),
        )
        .await;
        assert_eq!(body["error"]["code"], INVALID_PARAMS);
    }

    #[tokio::test]
    async fn tools_call_unknown_tool() {
        let (service, _) = service();
        let body = call(&service, "tools/call", json!({ "name": "evolve" })).await;
        assert_eq!(body["error"]["code"], INVALID_PARAMS);
        assert_eq!(body["error"]["message"], "Unknown tool: evolve");
    }

    #[tokio::test]
    async fn tools_call_without_params() {
        let (service, _) = service();
        let body = call(&service, "tools/call", Value::Null).await;
        assert_eq!(body["error"]["message"], "Missing params");
    }

    #[tokio::test]
    async fn prompts_list_has_compare() {
        let (service, _) = service();
        let body = call(&service, "prompts/list", json!({})).await;
        let prompts = body["result"]["prompts"].as_array().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0]["name"], COMPARE_POKEMON);
    }

    #[tokio::test]
    async fn prompts_get_renders_without_network() {
        let (service, api) = service();
        let body = call(
            &service,
            "prompts/get",
            json!({
                "name": "compare_pokemon",
                "arguments": { "pokemon1_name": "pikachu", "pokemon2_name": "charmander" }
            }),
        )
        .await;

        let message = &body["result"]["messages"][0];
        assert_eq!(message["role"], "user");
        let text = message["content"]["text"].as_str().unwrap();
        assert!(text.contains("pikachu"));
        assert!(text.contains("charmander"));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn prompts_get_unknown_prompt() {
        let (service, _) = service();
        let body = call(&service, "prompts/get", json!({ "name": "rank_pokemon" })).await;
        assert_eq!(body["error"]["code"], INVALID_PARAMS);
    }
}
