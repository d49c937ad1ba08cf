//! CLI command implementations.

pub mod rules;
pub mod show;
pub mod signals;

pub use rules::RulesArgs;
pub use show::ShowArgs;
pub use signals::SignalsArgs;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::debug;

use fundwatch_ext_file::{load_rules_or_default, FileFundSource};
use fundwatch_portfolio::{run_cycle, Classifier, Portfolio, PresentationSink};

use crate::error::CliResult;

/// Builds the classifier from an optional rules file.
pub fn load_classifier(rules: Option<&Path>) -> CliResult<Classifier> {
    let rules = load_rules_or_default(rules)?;
    Ok(Classifier::new(rules)?)
}

/// Runs one load cycle over a holdings file, dated today.
///
/// The sink has already shown the status line when this returns an error.
pub async fn load_and_render<K: PresentationSink>(
    path: PathBuf,
    classifier: &Classifier,
    sink: &mut K,
) -> CliResult<Portfolio> {
    let source = FileFundSource::new(path);
    let as_of: NaiveDate = Local::now().date_naive();
    debug!(source = %source.path().display(), %as_of, "loading holdings");
    Ok(run_cycle(&source, classifier, sink, as_of).await?)
}
