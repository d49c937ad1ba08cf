//! Keyword-driven asset class and drawdown signal classification.
//!
//! The [`Classifier`] evaluates the ordered rule table from a
//! [`RulesConfig`]; it holds no keyword logic of its own.

use serde::{Deserialize, Serialize};

use crate::types::{
    contains_any, AssetClass, Classification, FundPosition, FundRecord, RulesConfig, Signal,
    Suggestion, ThresholdSet,
};
use crate::PortfolioResult;

/// Maximum gauge fill, in percent, for a core leg.
pub const GAUGE_CAP_PCT: f64 = 120.0;

/// Aggregate exposure weights.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Exposures {
    /// Weight of overseas index funds.
    pub overseas: f64,

    /// Weight of defensive funds.
    pub defense: f64,

    /// Weight of high-volatility funds.
    pub high_beta: f64,
}

/// Dashboard summary of one core leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreLegSummary {
    /// Leg label.
    pub label: String,

    /// Name of the fund representing the leg.
    pub fund_name: String,

    /// Weight of that fund (0-1).
    pub weight: f64,

    /// Gauge fill in percent, capped at [`GAUGE_CAP_PCT`].
    pub gauge_pct: f64,

    /// Signal of that fund.
    pub signal: Signal,

    /// Suggestion of that fund.
    pub suggestion: Suggestion,
}

/// Classifies funds by name and drawdown.
///
/// # Examples
///
/// ```
/// use fundwatch_portfolio::classify::Classifier;
/// use fundwatch_portfolio::types::{AssetClass, Signal, Suggestion};
///
/// let classifier = Classifier::default();
///
/// assert_eq!(classifier.asset_class("黄金ETF"), AssetClass::Defense);
/// assert_eq!(
///     classifier.signal(AssetClass::Core, Some(-0.2)),
///     (Signal::StrongBuy, Suggestion::AggressiveAdd)
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: RulesConfig,
}

impl Classifier {
    /// Creates a classifier from validated rules.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PortfolioError::InvalidRules`] if the rules fail validation.
    pub fn new(rules: RulesConfig) -> PortfolioResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Returns the rules in use.
    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Asset class of a fund name: first matching rule wins, `Core` otherwise.
    #[must_use]
    pub fn asset_class(&self, name: &str) -> AssetClass {
        self.rules
            .asset_classes
            .iter()
            .find(|rule| rule.matches(name))
            .map(|rule| rule.class)
            .unwrap_or_default()
    }

    /// Threshold table for an asset class; `None` for defensive funds.
    #[must_use]
    pub fn thresholds_for(&self, class: AssetClass) -> Option<&ThresholdSet> {
        match class {
            AssetClass::Defense => None,
            AssetClass::HighBeta => Some(&self.rules.thresholds.high_beta),
            AssetClass::Core => Some(&self.rules.thresholds.standard),
        }
    }

    /// Signal and suggestion for an asset class and fractional drawdown.
    ///
    /// Defensive funds always hold. A missing drawdown yields the
    /// "insufficient data" hold. Otherwise thresholds are checked from
    /// most to least severe, inclusively.
    ///
    /// Comparisons use the computed float drawdown with no rounding, so a
    /// nominal -7% from a price of 0.93 against a high of 1.0 comes out
    /// as -6.999999999999995% and stays in `Buy`.
    #[must_use]
    pub fn signal(&self, class: AssetClass, drawdown: Option<f64>) -> (Signal, Suggestion) {
        let Some(thresholds) = self.thresholds_for(class) else {
            return (Signal::Normal, Suggestion::HoldAndObserve);
        };
        let Some(dd) = drawdown else {
            return (Signal::Normal, Suggestion::InsufficientData);
        };

        let signal = signal_for(thresholds, dd * 100.0);
        (signal, Suggestion::for_signal(signal))
    }

    /// Classifies a record. Pure in name and drawdown.
    #[must_use]
    pub fn classify(&self, record: &FundRecord) -> Classification {
        let asset_class = self.asset_class(&record.fund_name);
        let (signal, suggestion) = self.signal(asset_class, record.drawdown);
        Classification {
            asset_class,
            signal,
            suggestion,
        }
    }

    /// Sums weights into the exposure buckets by keyword.
    #[must_use]
    pub fn exposures(&self, positions: &[FundPosition]) -> Exposures {
        let rules = &self.rules.exposures;
        positions
            .iter()
            .fold(Exposures::default(), |mut acc, position| {
                let name = position.name();
                let w = position.record.current_weight;
                if contains_any(name, &rules.overseas) {
                    acc.overseas += w;
                }
                if contains_any(name, &rules.defense) {
                    acc.defense += w;
                }
                if contains_any(name, &rules.high_beta) {
                    acc.high_beta += w;
                }
                acc
            })
    }

    /// Summaries of the configured core legs that have a matching fund.
    #[must_use]
    pub fn core_legs(&self, positions: &[FundPosition]) -> Vec<CoreLegSummary> {
        self.rules
            .core_legs
            .iter()
            .filter_map(|leg| {
                let position = positions
                    .iter()
                    .find(|p| p.name().contains(leg.keyword.as_str()))?;
                let weight = position.record.current_weight;
                Some(CoreLegSummary {
                    label: leg.label.clone(),
                    fund_name: position.name().to_string(),
                    weight,
                    gauge_pct: (weight * 100.0).min(GAUGE_CAP_PCT),
                    signal: position.signal(),
                    suggestion: position.suggestion(),
                })
            })
            .collect()
    }
}

fn signal_for(thresholds: &ThresholdSet, drawdown_pct: f64) -> Signal {
    if drawdown_pct <= thresholds.strong_buy {
        Signal::StrongBuy
    } else if drawdown_pct <= thresholds.buy {
        Signal::Buy
    } else if drawdown_pct <= thresholds.watch {
        Signal::Watch
    } else {
        Signal::Normal
    }
}
