//! Asset class tags.

use serde::{Deserialize, Serialize};

/// Portfolio-role tag derived from a fund's name.
///
/// Exactly one class is assigned per fund. Funds matching no rule are `Core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    /// Core growth holdings.
    #[default]
    Core,

    /// Defensive holdings (dividend, gold, bonds), held structurally.
    Defense,

    /// High-volatility holdings (AI, robotics, overseas tech).
    HighBeta,
}

impl AssetClass {
    /// Returns a human-readable name for the asset class.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Defense => "Defense",
            Self::HighBeta => "High beta",
        }
    }

    /// Returns a short code for the asset class.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Defense => "defense",
            Self::HighBeta => "high_beta",
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
