//! Catalog service CLI
//!
//! ```sh
//! # Run with default config (~/.config/catalog-service/config.toml)
//! catalog-service
//!
//! # Custom config path and port
//! catalog-service --config /etc/catalog-service/config.toml --port 9090
//!
//! # Validate config without starting
//! catalog-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use catalog::config::AppConfig;
use catalog::server::{init_tracing, ServerHandle, ServerOptions};

/// Product catalog REST service.
#[derive(Parser, Debug)]
#[command(
    name = "catalog-service",
    version,
    about = "Product catalog REST service",
    long_about = "Product catalog REST service with paginated listing.\n\n\
                  Default config: ~/.config/catalog-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(catalog::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => {
            if cli.check {
                eprintln!("Invalid configuration in {}: {}", config_path.display(), e);
                std::process::exit(1);
            }
            (AppConfig::default(), Some(e))
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Page size   : {}", config.pagination.default_size);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            warn!("Failed to load config from {}: {}", config_path.display(), e);
            warn!("Using default configuration.");
        }
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
