//! Evolution engine service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use evolution_engine::api::{create_router, AppState};
use evolution_engine::config::Config;
use evolution_engine::error::EngineError;
use evolution_engine::metrics;
use evolution_engine::utils::shutdown_signal;

/// AI-Seed evolution engine HTTP service.
#[derive(Parser, Debug)]
#[command(name = "evolution-engine")]
#[command(about = "AI-Seed evolution engine HTTP service for path optimization")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides LISTEN_PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default).
    Run {
        /// HTTP server port (overrides LISTEN_PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // DEBUG_MODE only widens the log filter; request semantics are untouched.
    let debug_mode = std::env::var("DEBUG_MODE")
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    // Initialize logging
    let filter = if args.verbose || debug_mode {
        EnvFilter::new("evolution_engine=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Run the HTTP service.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        EngineError::Config(e)
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.listen_port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(EngineError::InvalidConfig(e).into());
    }

    let state = AppState::new(&config);
    let seeded = state.engine.metrics_snapshot().await.total_optimizations;

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await.map_err(EngineError::Io)?;

    info!("Starting AI-Seed Evolution Engine on {}", addr);
    info!("Engine initialized with {} optimizations", seeded);
    info!("Debug mode: {}", config.debug_mode);

    let router = create_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("EVOLUTION ENGINE - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}", config.socket_addr());
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Analyze Delay: {}ms", config.analyze_delay_ms);
    println!("  Optimize Delay: {}ms", config.optimize_delay_ms);
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
