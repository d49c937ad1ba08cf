//! Signals command implementation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use fundwatch_ext_file::DEFAULT_HOLDINGS_FILE;

use crate::cli::OutputFormat;
use crate::commands::{load_and_render, load_classifier};
use crate::output::print_success;
use crate::sink::{TerminalSink, View};

/// Arguments for the signals command.
#[derive(Args, Debug)]
pub struct SignalsArgs {
    /// Holdings CSV file
    #[arg(default_value = DEFAULT_HOLDINGS_FILE)]
    pub path: PathBuf,

    /// Only list funds in the buy or strong buy zone
    #[arg(long)]
    pub actionable: bool,
}

/// Execute the signals command.
pub async fn execute(
    args: SignalsArgs,
    format: OutputFormat,
    rules: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let classifier = load_classifier(rules)?;
    let mut sink = TerminalSink::new(View::Signals, format)
        .quiet(quiet)
        .actionable_only(args.actionable);
    let portfolio = load_and_render(args.path, &classifier, &mut sink).await?;

    if format == OutputFormat::Table && !quiet && portfolio.actionable().is_empty() {
        print_success("No fund in a buy zone");
    }
    Ok(())
}
