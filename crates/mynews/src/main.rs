mod app;
mod cache;
mod config;
mod handlers;
mod mock_data;
mod service;
mod state;
mod storage;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

/// MyNews - Browse the news list page by page, round and round
#[derive(Parser, Debug)]
#[command(name = "mynews")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    #[cfg(feature = "sqlite")]
    #[command(subcommand)]
    command: Option<Command>,
}

#[cfg(feature = "sqlite")]
#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Create the news table and seed it with demo records, then exit
    Provision {
        /// Number of demo records to insert (defaults to NEWS_DEMO_ITEMS)
        #[arg(long)]
        items: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mynews=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    #[cfg(feature = "sqlite")]
    if let Some(Command::Provision { items }) = cli.command {
        return provision(&config, items.unwrap_or(config.demo_item_count)).await;
    }

    let state = AppState::new(&config).await?;
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Creates the SQLite schema and seeds it when empty.
#[cfg(feature = "sqlite")]
async fn provision(config: &Config, items: usize) -> Result<()> {
    use crate::storage::SqliteRepository;

    let seed = mock_data::demo_records(items);
    let inserted = SqliteRepository::provision(&config.sqlite_path, seed).await?;

    if inserted == 0 {
        tracing::info!(path = %config.sqlite_path, "News table already populated, nothing seeded");
    } else {
        tracing::info!(path = %config.sqlite_path, inserted, "Provisioned news table");
    }

    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
