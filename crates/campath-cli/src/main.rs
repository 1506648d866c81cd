//! Campath CLI - Command line interface for campus route finding

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use campath_core::CampusMap;
use campath_data::{RecordSource, TsvSource};
use commands::{completions, config as config_cmd, locations, route, serve};
use config::Config;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "campath")]
#[command(author, version, about = "Shortest walking routes between campus locations")]
pub struct Cli {
    /// Location records file (TSV)
    #[arg(long, env = "CAMPATH_LOCATIONS", global = true)]
    pub locations: Option<PathBuf>,

    /// Segment records file (TSV)
    #[arg(long, env = "CAMPATH_SEGMENTS", global = true)]
    pub segments: Option<PathBuf>,

    /// Output format: table, json
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every known location
    Locations,
    /// Find a route between two locations
    Route(route::RouteArgs),
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Manage configuration
    Config(config_cmd::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Settings resolved from flags, environment and config file
pub struct AppContext {
    pub config: Config,
    pub locations_path: PathBuf,
    pub segments_path: PathBuf,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config = Config::load()?;

        let locations_path = cli
            .locations
            .clone()
            .unwrap_or_else(|| config.locations_path.clone());
        let segments_path = cli
            .segments
            .clone()
            .unwrap_or_else(|| config.segments_path.clone());
        let format = cli.format.as_deref().unwrap_or(&config.format).parse()?;

        Ok(Self {
            config,
            locations_path,
            segments_path,
            format,
        })
    }

    /// Read both record files and build the map
    pub async fn load_map(&self) -> anyhow::Result<CampusMap> {
        tracing::debug!(
            "Loading map from {:?} and {:?}",
            self.locations_path,
            self.segments_path
        );
        let source = TsvSource::new(&self.locations_path, &self.segments_path);
        let map = source.load_map().await.map_err(|e| {
            anyhow::anyhow!(
                "Failed to load map from {} and {}: {}",
                self.locations_path.display(),
                self.segments_path.display(),
                e
            )
        })?;
        Ok(map)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting campath CLI");

    match &cli.command {
        Commands::Config(args) => config_cmd::run(args)?,
        Commands::Completions(args) => completions::run(args)?,
        Commands::Locations => {
            let ctx = AppContext::new(&cli)?;
            locations::run(&ctx).await?
        }
        Commands::Route(args) => {
            let ctx = AppContext::new(&cli)?;
            route::run(args, &ctx).await?
        }
        Commands::Serve(args) => {
            let ctx = AppContext::new(&cli)?;
            serve::run(args, &ctx).await?
        }
    }

    Ok(())
}
