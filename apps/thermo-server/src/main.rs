mod gateway;

use anyhow::Result;
use clap::{Parser, Subcommand};
use temperature_converter::Service;
use thermo_bootstrap::host::{init_logging, shutdown_token};
use thermo_bootstrap::{AppConfig, CliArgs};

use std::path::PathBuf;
use std::sync::Arc;

/// Thermo Server - Celsius/Fahrenheit temperature conversion API
#[derive(Parser)]
#[command(name = "thermo-server")]
#[command(about = "Thermo Server - Celsius/Fahrenheit temperature conversion API")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config,
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (THERMO__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_cli_overrides(&args)?;

    init_logging(&config.logging)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Thermo Server starting");

    // Print config and exit if requested
    if args.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    // Dispatch subcommands (default: run)
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    // load_or_default already validated every layer; report the merged result.
    println!("Configuration is valid");
    print!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let router = gateway::build_router(&config.server, Arc::new(Service::new()));

    let listener = gateway::bind(addr).await?;
    let cancel = shutdown_token();

    gateway::serve(listener, router, cancel).await?;

    tracing::info!("Thermo Server stopped");
    Ok(())
}
