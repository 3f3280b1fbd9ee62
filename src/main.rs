//! Demo server for the fluent route builder.
//!
//! # Startup Sequence
//! ```text
//! CLI args → config file (optional) → logging → metrics (optional)
//!     → mount controllers (fail fast on any registration error)
//!     → bind listener → serve until Ctrl+C
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use fluent_router::config::{self, ServerConfig};
use fluent_router::lifecycle::{signals, Application, Shutdown};
use fluent_router::observability::{logging, metrics};
use fluent_router::topics::{TopicController, TopicModel};
use fluent_router::users::{InMemoryUserGetter, UserController};

#[derive(Parser)]
#[command(name = "fluent-router")]
#[command(about = "Serve the demo controllers through the fluent route builder", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Print the installed route table and exit.
    #[arg(long)]
    routes: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability)?;
    tracing::info!("fluent-router v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    let mut app = Application::new(config.clone());
    app.mount(UserController::new(Arc::new(InMemoryUserGetter::seeded())))?
        .mount(TopicController::new(vec![
            TopicModel::new(1, "Learning Rust ownership", "ownership"),
            TopicModel::new(2, "Fluent builders in practice", "builders"),
        ]))?;

    if cli.routes {
        for route in app.routes() {
            println!("{route}");
        }
        return Ok(());
    }

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::trigger_on_ctrl_c(shutdown);

    app.serve(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
