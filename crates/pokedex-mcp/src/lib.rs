pub mod handlers;
pub mod jsonrpc;
pub mod prompts;
pub mod service;
pub mod tools;

pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use prompts::{PromptDefinition, PromptRegistry};
pub use service::McpService;
pub use tools::{ToolDefinition, ToolRegistry};
