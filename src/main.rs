//! Website audit service.
//!
//! Proxies a handful of third-party auditing calls and extracts page features
//! (headings, meta tags, canonical link) from fetched HTML.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────────┐
//!                     │                  SITE AUDIT                      │
//!                     │                                                  │
//!   Client Request    │  ┌─────────┐    ┌──────────┐    ┌────────────┐  │
//!   ──────────────────┼─▶│  http   │───▶│ handlers │───▶│  upstream  │──┼──▶ Remote site /
//!                     │  │ server  │    │          │    │   client   │  │    SSL Labs /
//!                     │  └─────────┘    └────┬─────┘    └────────────┘  │    alttext.in
//!                     │                      │                          │
//!                     │                      ▼                          │
//!   Client Response   │  ┌─────────┐    ┌──────────┐                    │
//!   ◀─────────────────┼──│response │◀───│ extract  │                    │
//!                     │  │ (JSON)  │    │ (DOM)    │                    │
//!                     │  └─────────┘    └──────────┘                    │
//!                     │                                                  │
//!                     │   config · observability · lifecycle             │
//!                     └──────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use site_audit::config::loader::load_or_default;
use site_audit::lifecycle::{signals, Shutdown};
use site_audit::observability::{logging, metrics};
use site_audit::HttpServer;

#[derive(Parser)]
#[command(name = "site-audit", version, about = "Website audit service", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long, env = "SITE_AUDIT_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.config.as_deref())?;

    logging::init(&config.observability.log_level);
    tracing::info!("site-audit v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_body_bytes = config.limits.max_body_bytes,
        request_timeout_secs = config.timeouts.request_secs,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    signals::shutdown_on_signal(&shutdown).await;
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
