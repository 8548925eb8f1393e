use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use pokedex_api::{PokeApiClient, DEFAULT_BASE_URL};
use pokedex_mcp::McpService;
use pokedex_server::app_state::AppState;
use pokedex_server::{router, stdio};

#[derive(Parser)]
#[command(name = "pokedex-server", about = "MCP server for Pokemon lookups backed by PokeAPI")]
struct Cli {
    /// PokeAPI base URL
    #[arg(long, env = "POKEAPI_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve newline-delimited JSON-RPC on stdin/stdout (default)
    Stdio,

    /// Serve the Streamable HTTP transport
    Http {
        #[arg(long, env = "POKEDEX_HOST", default_value = "127.0.0.1")]
        host: String,

        #[arg(long, env = "POKEDEX_PORT", default_value_t = 3000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout belongs to the stdio transport.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api = PokeApiClient::new(cli.api_url);
    tracing::info!("Using PokeAPI at {}", api.base_url());
    let service = McpService::new(Arc::new(api));

    match cli.command.unwrap_or(Commands::Stdio) {
        Commands::Stdio => {
            tracing::info!("Pokemon server listening on stdio");
            stdio::serve(
                &service,
                BufReader::new(tokio::io::stdin()),
                tokio::io::stdout(),
            )
            .await?;
        }
        Commands::Http { host, port } => {
            let app = router::create_router(AppState { service });

            let addr = format!("{host}:{port}");
            tracing::info!("Pokemon server listening on http://{addr}/mcp");

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
