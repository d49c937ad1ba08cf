//! One load cycle: fetch, compute, classify, render.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::classify::Classifier;
use crate::portfolio::{Portfolio, StatusLine};
use crate::source::{FundSource, PresentationSink};
use crate::PortfolioResult;

/// Runs one load cycle against a source and a sink.
///
/// The source is awaited exactly once. On failure the sink receives the
/// unavailability status instead of a table, and the source error is
/// returned. On success the sink renders the snapshot once and the snapshot
/// is returned.
///
/// # Errors
///
/// Returns [`crate::PortfolioError::SourceUnavailable`] if the source fails,
/// or the sink's error if rendering fails.
pub async fn run_cycle<S, K>(
    source: &S,
    classifier: &Classifier,
    sink: &mut K,
    as_of: NaiveDate,
) -> PortfolioResult<Portfolio>
where
    S: FundSource + ?Sized,
    K: PresentationSink + ?Sized,
{
    let text = match source.fetch().await {
        Ok(text) => text,
        Err(e) => {
            warn!(source = source.name(), error = %e, "failed to load holdings");
            sink.report_unavailable(&StatusLine::unavailable(source.name()))?;
            return Err(e);
        }
    };

    let portfolio = Portfolio::from_text(&text, classifier, as_of);
    if portfolio.dropped_rows > 0 {
        debug!(
            source = source.name(),
            dropped = portfolio.dropped_rows,
            "skipped malformed rows"
        );
    }

    sink.render(&portfolio)?;
    Ok(portfolio)
}
