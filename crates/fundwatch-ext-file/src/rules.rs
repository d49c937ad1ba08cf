//! Rules file loading.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use fundwatch_portfolio::{PortfolioError, RulesConfig};

/// Errors loading a rules file.
#[derive(Debug, Error)]
pub enum RulesFileError {
    /// The file could not be read.
    #[error("cannot read rules file {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but the rules are malformed or invalid.
    #[error("rules file {path}: {source}")]
    Invalid {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: PortfolioError,
    },
}

/// Load classification rules from a TOML file.
///
/// Sections missing from the file keep their built-in defaults.
pub fn load_rules(path: impl AsRef<Path>) -> Result<RulesConfig, RulesFileError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| RulesFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rules =
        RulesConfig::from_toml_str(&content).map_err(|source| RulesFileError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), rules = rules.asset_classes.len(), "loaded rules file");
    Ok(rules)
}

/// Load rules from `path` if given, otherwise use the built-in rules.
pub fn load_rules_or_default(path: Option<&Path>) -> Result<RulesConfig, RulesFileError> {
    match path {
        Some(path) => load_rules(path),
        None => Ok(RulesConfig::default()),
    }
}
