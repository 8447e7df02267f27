//! Webpanel Server
//!
//! Run with: cargo run --bin webpanel
//!
//! # Configuration
//!
//! Read from `--config`, else the default locations (see [`Config::load_default`]).
//! Environment variables override file values:
//! - `WEBPANEL_HOST`, `WEBPANEL_PORT`: bind address (default: 0.0.0.0:8080)
//! - `WEBPANEL_STATIC_DIR`: built front end (default: webpanel-ui/dist)
//! - `WEBPANEL_PAGE_FILE`: HTML file to serve at `/`
//! - `WEBPANEL_LOG_LEVEL`, `WEBPANEL_LOG_FORMAT`: logging
//! - `RUST_LOG`: takes precedence over the configured level

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webpanel::{
    generate_default_config, serve, AppState, Config, ConnectionHub, HubConfig, LoggingConfig,
    PageStore,
};

#[derive(Parser)]
#[command(name = "webpanel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve a themed page and push live display messages to it")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// HTML file to serve at /
    #[arg(long)]
    page: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a default config file
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(Command::InitConfig) = args.command {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(page) = args.page {
        config.server.page_file = Some(page.to_string_lossy().to_string());
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Webpanel v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Static directory: {}", config.server.static_dir);

    let page = match &config.server.page_file {
        Some(file) => {
            tracing::info!("Serving page file {}", file);
            PageStore::with_page_file(&config.server.static_dir, Path::new(file)).await?
        }
        None => PageStore::new(&config.server.static_dir),
    };

    let hub = ConnectionHub::new(HubConfig::from(&config.hub));
    let state = AppState::with_parts(config.server, hub, page);

    serve(state).await?;

    tracing::info!("Webpanel stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("webpanel={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
