//! File-based holdings source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use fundwatch_portfolio::{FundSource, PortfolioError, PortfolioResult};

use crate::DEFAULT_HOLDINGS_FILE;

/// Holdings CSV read from disk.
///
/// The file is read on every [`FundSource::fetch`]; nothing is cached, so
/// each load cycle sees the file as it is at that moment.
#[derive(Debug, Clone)]
pub struct FileFundSource {
    path: PathBuf,
    name: String,
}

impl FileFundSource {
    /// Create a source for the given file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileFundSource {
    fn default() -> Self {
        Self::new(DEFAULT_HOLDINGS_FILE)
    }
}

#[async_trait]
impl FundSource for FileFundSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> PortfolioResult<String> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| PortfolioError::source_unavailable(&self.name, e.to_string()))?;
        debug!(path = %self.path.display(), bytes = text.len(), "read holdings file");
        Ok(text)
    }
}
