use pokedex_mcp::McpService;

/// Shared application state for the HTTP transport.
#[derive(Clone)]
pub struct AppState {
    pub service: McpService,
}
