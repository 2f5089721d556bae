//! funsel - sample the selector's spring curve and simulate transitions headlessly

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::commands::CurveArgs;
use crate::config::FunselConfig;

#[derive(Parser)]
#[command(name = "funsel", version, about = "Fun selector spring easing toolkit")]
struct Cli {
    /// Path to a funsel.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print evenly spaced samples of the spring easing curve
    Curve(CurveArgs),

    /// Press the selector and print every animation frame
    Toggle {
        /// Number of presses to simulate
        #[arg(long, default_value_t = 1)]
        presses: u32,

        /// Frames per second (overrides [simulation] fps)
        #[arg(long)]
        fps: Option<u32>,
    },

    /// Write a default funsel.toml
    Init {
        /// Directory or file path to write
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init(&path),
        Commands::Curve(args) => {
            let config = FunselConfig::load(cli.config.as_deref())?;
            commands::curve(&config, &args)
        }
        Commands::Toggle { presses, fps } => {
            let config = FunselConfig::load(cli.config.as_deref())?;
            commands::toggle(&config, presses, fps)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
