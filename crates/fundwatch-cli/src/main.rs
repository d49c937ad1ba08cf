//! Fundwatch CLI - Drawdown signals for a fund portfolio.
//!
//! # Usage
//!
//! ```bash
//! # Full dashboard for ./FUND_BASE.csv
//! fundwatch show
//!
//! # Signal list for another file, as JSON
//! fundwatch signals holdings.csv --format json
//!
//! # Custom keyword tables and thresholds
//! fundwatch show --rules rules.toml
//!
//! # Print the built-in rules as a starting point
//! fundwatch rules > rules.toml
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
mod commands;
mod error;
mod output;
mod sink;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let format = cli.format;
    let rules = cli.rules.as_deref();

    match cli.command {
        Commands::Show(args) => commands::show::execute(args, format, rules, cli.quiet).await?,
        Commands::Signals(args) => {
            commands::signals::execute(args, format, rules, cli.quiet).await?
        }
        Commands::Rules(args) => commands::rules::execute(args, format, rules)?,
    }

    Ok(())
}
