//! Demo server for either-dispatch.
//!
//! Serves the reference routes so every default matcher can be exercised with
//! curl:
//!
//! ```text
//! $ either-demo --config demo.toml
//! $ curl -i localhost:8080/rack/symbol/left
//! HTTP/1.1 302 Found
//! location: /rack/symbol/right
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use either_dispatch::config::{load_config, AppConfig};
use either_dispatch::observability::{logging, metrics};
use either_dispatch::HttpServer;

#[derive(Parser)]
#[command(name = "either-demo")]
#[command(about = "Serve routes that return success/failure outcomes", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability)?;
    tracing::info!("either-demo v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        right_aliases = ?config.matchers.right_aliases,
        left_aliases = ?config.matchers.left_aliases,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
