//! Rules command implementation.
//!
//! Prints the effective classification rules.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::commands::load_classifier;
use crate::error::CliError;
use crate::output::{print_header, print_json, print_output, KeyValue};

/// Arguments for the rules command.
///
/// Full rules print as TOML (table format) or JSON. CSV is only available
/// together with `--thresholds`.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Print only the drawdown thresholds (the only view that supports CSV)
    #[arg(long)]
    pub thresholds: bool,
}

/// Execute the rules command.
pub fn execute(args: RulesArgs, format: OutputFormat, rules: Option<&Path>) -> Result<()> {
    let classifier = load_classifier(rules)?;
    let rules = classifier.rules();

    if args.thresholds {
        let t = &rules.thresholds;
        let rows = vec![
            KeyValue::new("Standard watch", format!("{}%", t.standard.watch)),
            KeyValue::new("Standard buy", format!("{}%", t.standard.buy)),
            KeyValue::new("Standard strong buy", format!("{}%", t.standard.strong_buy)),
            KeyValue::new("High beta watch", format!("{}%", t.high_beta.watch)),
            KeyValue::new("High beta buy", format!("{}%", t.high_beta.buy)),
            KeyValue::new("High beta strong buy", format!("{}%", t.high_beta.strong_buy)),
        ];
        if format == OutputFormat::Table {
            print_header("Drawdown thresholds");
        }
        return print_output(&rows, format);
    }

    match format {
        OutputFormat::Json => print_json(rules)?,
        OutputFormat::Csv => {
            return Err(CliError::UnsupportedFormat(
                "full rules cannot be printed as CSV; use --thresholds or --format table|json"
                    .to_string(),
            )
            .into());
        }
        OutputFormat::Table => {
            let toml = rules
                .to_toml_string()
                .map_err(|e| CliError::Serialization(e.to_string()))?;
            print!("{toml}");
        }
    }
    Ok(())
}
