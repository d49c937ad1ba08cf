//! Error types for fund portfolio operations.
//!
//! Only [`PortfolioError::SourceUnavailable`] is a pipeline failure. Short rows,
//! unparseable numbers, zero totals and missing highs are absorbed locally
//! with documented defaults and never surface here.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// The holdings source could not be fetched or opened.
    #[error("Source '{source_name}' unavailable: {reason}")]
    SourceUnavailable {
        /// Name of the source (usually a file path).
        source_name: String,
        /// Why the read failed.
        reason: String,
    },

    /// Classification rules failed validation.
    #[error("Invalid rules: {reason}")]
    InvalidRules {
        /// The reason the rules are invalid.
        reason: String,
    },

    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// The presentation sink failed to render.
    #[error("Render failed: {reason}")]
    RenderFailed {
        /// The reason rendering failed.
        reason: String,
    },
}

impl PortfolioError {
    /// Create a source unavailable error.
    #[must_use]
    pub fn source_unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid rules error.
    #[must_use]
    pub fn invalid_rules(reason: impl Into<String>) -> Self {
        Self::InvalidRules {
            reason: reason.into(),
        }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a render failed error.
    #[must_use]
    pub fn render_failed(reason: impl Into<String>) -> Self {
        Self::RenderFailed {
            reason: reason.into(),
        }
    }

    /// Returns true if this error means the holdings could not be loaded.
    #[must_use]
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::source_unavailable("FUND_BASE.csv", "No such file");
        assert!(err.to_string().contains("FUND_BASE.csv"));
        assert!(err.to_string().contains("No such file"));
        assert!(err.is_source_unavailable());

        let err = PortfolioError::invalid_rules("empty keyword");
        assert!(err.to_string().contains("empty keyword"));
        assert!(!err.is_source_unavailable());

        let err = PortfolioError::missing_field("as_of");
        assert!(err.to_string().contains("as_of"));
    }

    #[test]
    fn test_error_clone() {
        let err = PortfolioError::render_failed("broken pipe");
        assert_eq!(err.clone(), err);
    }
}
