//! Show command implementation.
//!
//! Renders the full dashboard for a holdings file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use fundwatch_ext_file::DEFAULT_HOLDINGS_FILE;

use crate::cli::OutputFormat;
use crate::commands::{load_and_render, load_classifier};
use crate::sink::{TerminalSink, View};

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Holdings CSV file
    #[arg(default_value = DEFAULT_HOLDINGS_FILE)]
    pub path: PathBuf,
}

/// Execute the show command.
pub async fn execute(
    args: ShowArgs,
    format: OutputFormat,
    rules: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let classifier = load_classifier(rules)?;
    let mut sink = TerminalSink::new(View::Dashboard, format).quiet(quiet);
    load_and_render(args.path, &classifier, &mut sink).await?;
    Ok(())
}
