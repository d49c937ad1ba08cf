//! Holdings source and presentation sink seams.
//!
//! - [`FundSource`]: async read of the raw holdings text (the pipeline's one await)
//! - [`PresentationSink`]: consumes a finished [`Portfolio`] or an unavailability status
//!
//! Concrete sources live in extension crates (e.g. a file source); concrete
//! sinks live with the outer surface (terminal, API).

use async_trait::async_trait;

use crate::portfolio::{Portfolio, StatusLine};
use crate::{PortfolioError, PortfolioResult};

/// Source of raw holdings CSV text.
#[async_trait]
pub trait FundSource: Send + Sync {
    /// Name used in status and error messages.
    fn name(&self) -> &str;

    /// Reads the full holdings text.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::SourceUnavailable`] if the text cannot be read.
    async fn fetch(&self) -> PortfolioResult<String>;
}

/// Renders portfolio snapshots.
pub trait PresentationSink {
    /// Renders a complete snapshot. Called once per successful load.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::RenderFailed`] if output fails.
    fn render(&mut self, portfolio: &Portfolio) -> PortfolioResult<()>;

    /// Shows the unavailability status in place of the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::RenderFailed`] if output fails.
    fn report_unavailable(&mut self, status: &StatusLine) -> PortfolioResult<()>;
}

// =============================================================================
// IN-MEMORY IMPLEMENTATIONS
// =============================================================================

/// In-memory holdings source for testing.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    text: Option<String>,
}

impl StaticSource {
    /// A source that returns `text`.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
        }
    }

    /// A source that always fails.
    #[must_use]
    pub fn unavailable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
        }
    }
}

#[async_trait]
impl FundSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> PortfolioResult<String> {
        self.text
            .clone()
            .ok_or_else(|| PortfolioError::source_unavailable(&self.name, "no data"))
    }
}

/// Sink that records what it was given, for testing.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Snapshots passed to [`PresentationSink::render`].
    pub rendered: Vec<Portfolio>,

    /// Last status line reported.
    pub status: Option<StatusLine>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PresentationSink for MemorySink {
    fn render(&mut self, portfolio: &Portfolio) -> PortfolioResult<()> {
        self.status = Some(portfolio.status_line());
        self.rendered.push(portfolio.clone());
        Ok(())
    }

    fn report_unavailable(&mut self, status: &StatusLine) -> PortfolioResult<()> {
        self.status = Some(status.clone());
        Ok(())
    }
}
