//! CLI error types.

use fundwatch_ext_file::RulesFileError;
use fundwatch_portfolio::PortfolioError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The rules file could not be loaded.
    #[error(transparent)]
    Rules(#[from] RulesFileError),

    /// The portfolio pipeline failed.
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    /// The command cannot produce the requested output format.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
