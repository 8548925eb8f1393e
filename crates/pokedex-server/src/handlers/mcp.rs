use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::app_state::AppState;

/// Handle one MCP JSON-RPC message posted by the client.
///
/// Requests are answered inline with the JSON-RPC response; notifications
/// get `202 Accepted` and an empty body.
pub async fn mcp_request(State(state): State<AppState>, body: Bytes) -> Response {
    match state.service.handle_message(&body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
