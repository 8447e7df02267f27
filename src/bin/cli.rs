//! Webpanel CLI
//!
//! Command-line interface for a running Webpanel server:
//! - Push display messages
//! - Replace the served page
//! - Check status
//! - Listen on the live channel like a page would

use clap::{Parser, Subcommand};
use futures_util::{SinkExt, StreamExt};
use std::path::PathBuf;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};
use webpanel::api::dto::{DisplayResponse, PageResponse, StatusResponse};

#[derive(Parser)]
#[command(name = "webpanel-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Control a running Webpanel server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, default_value = "http://localhost:8080", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a payload in the display region of every connected page
    Display {
        /// Payload (HTML or text)
        markup: String,
        /// Only this connection (see `status`)
        #[arg(long)]
        to: Option<String>,
    },

    /// Replace the page served at /
    Page {
        /// HTML file to serve
        path: Option<PathBuf>,
        /// Revert to the built front end instead
        #[arg(long, conflicts_with = "path")]
        reset: bool,
    },

    /// Show server status
    Status,

    /// Connect to the live channel and print every message
    Listen {
        /// Text to send once connected
        #[arg(short, long)]
        send: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let api_url = cli.api_url.trim_end_matches('/').to_string();

    match cli.command {
        Commands::Display { markup, to } => {
            let response = client
                .post(display_url(&api_url, to.as_deref()))
                .body(markup)
                .send()
                .await?;

            if !response.status().is_success() {
                fail(response).await;
            }

            let result: DisplayResponse = response.json().await?;
            println!("Delivered to {} page(s)", result.delivered);
        }

        Commands::Page { path, reset } => {
            if reset {
                let response = client
                    .delete(format!("{}/api/v1/page", api_url))
                    .send()
                    .await?;
                if !response.status().is_success() {
                    fail(response).await;
                }
                println!("Page reset");
                return Ok(());
            }

            let Some(path) = path else {
                eprintln!("Give a page file or --reset");
                std::process::exit(2);
            };

            if !path.exists() {
                eprintln!("File not found: {:?}", path);
                std::process::exit(1);
            }

            let html = tokio::fs::read_to_string(&path).await?;
            let response = client
                .put(format!("{}/api/v1/page", api_url))
                .body(html)
                .send()
                .await?;

            if !response.status().is_success() {
                fail(response).await;
            }

            let result: PageResponse = response.json().await?;
            println!("Page set from {:?} ({} bytes)", path, result.bytes);
        }

        Commands::Status => {
            let response = client
                .get(format!("{}/api/v1/status", api_url))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let status: StatusResponse = resp.json().await?;

                    if cli.format == "json" {
                        println!("{}", serde_json::to_string_pretty(&status)?);
                    } else {
                        print_status(&status);
                    }
                }
                Ok(resp) => fail(resp).await,
                Err(e) => {
                    eprintln!("Cannot connect to Webpanel at {}", api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin webpanel");
                    std::process::exit(1);
                }
            }
        }

        Commands::Listen { send } => {
            let ws_url = websocket_url(&api_url);
            let (mut socket, _) = connect_async(ws_url.as_str()).await?;
            println!("Connected to {}", ws_url);

            if let Some(text) = send {
                socket.send(Message::Text(text)).await?;
            }

            while let Some(message) = socket.next().await {
                match message? {
                    Message::Text(text) => println!("{}", text),
                    Message::Close(_) => break,
                    _ => {}
                }
            }

            println!("Connection closed");
        }
    }

    Ok(())
}

async fn fail(response: reqwest::Response) -> ! {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    eprintln!("Failed ({}): {}", status, text);
    std::process::exit(1);
}

/// Map the HTTP base URL onto the live channel endpoint
fn display_url(api_url: &str, connection_id: Option<&str>) -> String {
    match connection_id {
        Some(id) => format!("{}/api/v1/display/{}", api_url, id),
        None => format!("{}/api/v1/display", api_url),
    }
}

fn websocket_url(api_url: &str) -> String {
    let base = api_url
        .replacen("https://", "wss://", 1)
        .replacen("http://", "ws://", 1);
    format!("{}/ws", base.trim_end_matches('/'))
}

fn print_status(status: &StatusResponse) {
    println!("Webpanel v{}", status.version);
    println!();
    println!("{:<18} {}", "Connected pages:", status.connections);
    for id in &status.connection_ids {
        println!("  {}", id);
    }
    println!("{:<18} {}", "Inbound messages:", status.inbound_messages);
    println!(
        "{:<18} {}",
        "Last display:",
        status.last_display.as_deref().unwrap_or("-")
    );
    println!("{:<18} {}", "Uptime:", format_duration(status.uptime_seconds));
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
