//! tinyserve — a small HTTP service around a declarative route table.
//!
//! Startup sequence: parse CLI, load config, initialize tracing, bind the
//! listener, build the demo route table, serve. A port already in use is a
//! fatal startup error reported by the bind call.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use tinyserve::app::demo_routes;
use tinyserve::config::{load_config, ServerConfig};
use tinyserve::http::HttpServer;
use tinyserve::observability::init_tracing;

#[derive(Parser)]
#[command(name = "tinyserve")]
#[command(about = "Demo HTTP server backed by a declarative route table", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured listener port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    init_tracing(&config.observability.log_level);

    let mut addr: SocketAddr = config.listener.bind_address.parse()?;
    if let Some(port) = cli.port {
        addr.set_port(port);
    }

    tracing::info!(
        address = %addr,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(addr).await?;

    let routes = demo_routes();
    tracing::info!(
        address = %listener.local_addr()?,
        routes = routes.len(),
        "example app listening"
    );

    let server = HttpServer::new(config, routes);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
