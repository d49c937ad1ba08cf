//! Drawdown signals and their suggestion text.

use serde::{Deserialize, Serialize};

/// Recommended action tag derived from drawdown and asset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// No action.
    #[default]
    Normal,

    /// Drawdown past the watch threshold.
    Watch,

    /// Drawdown inside the buy zone.
    Buy,

    /// Drawdown past the strong-buy threshold.
    StrongBuy,
}

impl Signal {
    /// Returns a human-readable label for the signal.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Watch => "Watch",
            Self::Buy => "Buy zone",
            Self::StrongBuy => "Strong buy",
        }
    }

    /// Returns a short code for the signal.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Watch => "watch",
            Self::Buy => "buy",
            Self::StrongBuy => "strong",
        }
    }

    /// Returns true if the signal calls for adding to the position.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        matches!(self, Self::Buy | Self::StrongBuy)
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Human-readable suggestion attached to a [`Signal`].
///
/// Several suggestions share [`Signal::Normal`]: a healthy hold, a defensive
/// hold, and a hold for lack of a drawdown reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    /// Healthy position, keep holding.
    #[default]
    Hold,

    /// Defensive holding, not traded on drawdown.
    HoldAndObserve,

    /// No trailing high to measure drawdown against.
    InsufficientData,

    /// Small staged additions.
    StagedAdditions,

    /// Add 300–500.
    Add,

    /// Aggressively add 1000–3000.
    AggressiveAdd,
}

impl Suggestion {
    /// Returns the suggestion for a threshold-derived signal.
    #[must_use]
    pub fn for_signal(signal: Signal) -> Self {
        match signal {
            Signal::Normal => Self::Hold,
            Signal::Watch => Self::StagedAdditions,
            Signal::Buy => Self::Add,
            Signal::StrongBuy => Self::AggressiveAdd,
        }
    }

    /// Returns the signal this suggestion is reported under.
    #[must_use]
    pub fn signal(&self) -> Signal {
        match self {
            Self::Hold | Self::HoldAndObserve | Self::InsufficientData => Signal::Normal,
            Self::StagedAdditions => Signal::Watch,
            Self::Add => Signal::Buy,
            Self::AggressiveAdd => Signal::StrongBuy,
        }
    }

    /// Returns the display text.
    #[must_use]
    pub fn text(&self) -> &'static str {
        match self {
            Self::Hold => "hold",
            Self::HoldAndObserve => "hold and observe",
            Self::InsufficientData => "insufficient data",
            Self::StagedAdditions => "small staged additions",
            Self::Add => "add 300–500",
            Self::AggressiveAdd => "aggressively add 1000–3000",
        }
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}
