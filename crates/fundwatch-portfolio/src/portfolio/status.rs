//! Status line reported alongside (or instead of) the dashboard.

use serde::{Deserialize, Serialize};

/// Single human-readable status slot.
///
/// A failed load replaces the summary with [`StatusLine::Unavailable`]; it is
/// never combined with a partial table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StatusLine {
    /// Holdings loaded.
    Online {
        /// Total portfolio market value.
        total_amount: f64,
    },

    /// Holdings could not be read.
    Unavailable {
        /// Name of the source that failed.
        source_name: String,
    },
}

impl StatusLine {
    /// Creates an unavailable status for a source.
    #[must_use]
    pub fn unavailable(source_name: impl Into<String>) -> Self {
        Self::Unavailable {
            source_name: source_name.into(),
        }
    }

    /// Returns true if the holdings loaded.
    #[must_use]
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online { .. })
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online { total_amount } => {
                write!(f, "online · portfolio value ¥{total_amount:.2}")
            }
            Self::Unavailable { source_name } => {
                write!(f, "warning · data unavailable, unable to read {source_name}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let online = StatusLine::Online {
            total_amount: 3400.0,
        };
        assert_eq!(online.to_string(), "online · portfolio value ¥3400.00");
        assert!(online.is_online());

        let down = StatusLine::unavailable("FUND_BASE.csv");
        assert!(down.to_string().contains("unable to read FUND_BASE.csv"));
        assert!(!down.is_online());
    }
}
