//! Attendance dashboard server.
//!
//! Loads the configuration, starts the source-health refresh loop and serves
//! the dashboard over HTTP until interrupted.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use attendance_dashboard::api::{AppState, create_router};
use attendance_dashboard::config::{ConfigLoader, DashboardConfig};
use attendance_dashboard::refresh::{report_channel, spawn_refresh_loop};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serve the student attendance dashboard.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML configuration file; built-in defaults are used when omitted
    #[arg(short, long, value_name = "FILE", env = "ATTENDANCE_DASHBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, overriding `server.bind`
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<DashboardConfig> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?
            .into_config(),
        None => DashboardConfig::default(),
    };

    if let Some(bind) = &args.bind {
        config.server.bind = bind.clone();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = Arc::new(load_config(&args)?);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        source = %config.source.path.display(),
        sheet = %config.source.sheet,
        interval_secs = config.refresh.interval_secs,
        "Starting attendance dashboard"
    );

    let (reports, last_refresh) = report_channel();
    let refresh = spawn_refresh_loop(Arc::clone(&config), reports);

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    info!(address = %config.server.bind, "Listening");

    let router = create_router(AppState::with_reports(Arc::clone(&config), last_refresh));
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("Server error")?;

    refresh.abort();
    info!("Shut down");
    Ok(())
}
