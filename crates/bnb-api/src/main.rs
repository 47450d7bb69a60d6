//! # bnb-api Server Entry Point
//!
//! Parses CLI arguments, initializes tracing, and serves the application
//! router.

use clap::Parser;

/// BnB Stack order API — booking order validation service.
///
/// Accepts booking order payloads on POST /orders, validates them, and
/// returns the TWD-normalized order or a per-field error map.
#[derive(Parser, Debug)]
#[command(name = "bnb-api", version, about)]
struct Cli {
    /// Socket address to listen on.
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: std::net::SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!("bnb-api listening on {}", cli.bind);
    axum::serve(listener, bnb_api::app()).await?;

    Ok(())
}
