//! opsdrill API server - JSON transport over the mission engine.

mod config;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use clap::Parser;
use opsdrill::store::MissionStore;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "opsdrill-api")]
#[command(about = "JSON API for the incident-response training engine")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Server config file (missing file uses defaults)
    #[arg(long, default_value = "opsdrill.toml")]
    config: PathBuf,

    /// Directory containing web UI static files
    #[arg(long)]
    ui_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("opsdrill_api=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let cfg = config::load_config(&args.config)?;
    info!(config = %args.config.display(), api_prefix = %cfg.api_prefix, "starting opsdrill-api");

    // All mission content is fixed at startup; sessions live in memory
    // for the life of the process.
    let state = AppState::new(MissionStore::with_builtin_missions());

    let origins = cfg
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .nest(&cfg.api_prefix, routes::api_router())
        .route("/health", get(routes::health))
        .layer(cors)
        .with_state(state);

    // Serve the separately-built web UI if a directory was given.
    if let Some(ui_dir) = args.ui_dir {
        if ui_dir.exists() {
            info!(ui_dir = %ui_dir.display(), "serving static UI files");
            app =
                app.fallback_service(ServeDir::new(ui_dir).append_index_html_on_directories(true));
        } else {
            info!(ui_dir = %ui_dir.display(), "UI directory not found, API-only mode");
        }
    }

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
