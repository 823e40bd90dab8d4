use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use odometer_core::{AppConfig, CounterConfig, Skip};

mod commands;

#[derive(Parser)]
#[command(name = "odometer")]
#[command(author, version, about = "A reeling digit counter for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read configuration from this file instead of ~/.config/odometer/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive counter
    Run,
    /// Render a value once and print it
    Show {
        /// Value to display
        value: u64,
        /// Minimum number of digit cells
        #[arg(short = 'd', long)]
        digits: Option<usize>,
        /// Print the class string of every element instead of the digits
        #[arg(long)]
        classes: bool,
    },
    /// Reel from one value to another
    Reel {
        /// Value to stop at
        target: u64,
        /// Starting value
        #[arg(short = 'f', long, default_value_t = 0)]
        from: u64,
        /// Increment per step (non-numeric input falls back to 1)
        #[arg(short = 's', long)]
        skip: Option<String>,
        /// Milliseconds between steps
        #[arg(short = 'i', long)]
        interval: Option<u64>,
        /// Minimum number of digit cells
        #[arg(short = 'd', long)]
        digits: Option<usize>,
        /// Print each step as a line instead of drawing the widget
        #[arg(long)]
        plain: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(&config).await,
        Some(Commands::Show {
            value,
            digits,
            classes,
        }) => {
            let counter_config = CounterConfig {
                digits: digits.unwrap_or(config.counter.digits),
                ..config.counter.clone()
            };
            commands::show::run(&counter_config, value, classes)
        }
        Some(Commands::Reel {
            target,
            from,
            skip,
            interval,
            digits,
            plain,
        }) => {
            let counter_config = CounterConfig {
                digits: digits.unwrap_or(config.counter.digits),
                animated: true,
                interval_ms: interval.unwrap_or(config.counter.interval_ms),
                skip: skip.as_deref().map(Skip::parse).unwrap_or(config.counter.skip),
            };
            commands::reel::run(&config, &counter_config, from, target, plain).await
        }
    }
}
