use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::handlers;

/// Create the HTTP router for the Streamable HTTP transport.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/mcp", post(handlers::mcp_request))
        // MCP clients run in browsers and desktop shells alike.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
