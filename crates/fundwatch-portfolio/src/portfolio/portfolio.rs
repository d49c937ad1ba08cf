//! Portfolio struct and core methods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PortfolioBuilder, StatusLine};
use crate::classify::{Classifier, CoreLegSummary};
use crate::loader;
use crate::types::{AssetClass, FundPosition, Signal};

/// An immutable snapshot of the fund portfolio for one load cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Date the snapshot was taken.
    pub as_of: NaiveDate,

    /// Classified positions, in input order.
    pub funds: Vec<FundPosition>,

    /// Total market value.
    pub total_amount: f64,

    /// Weight of overseas index funds.
    pub overseas_weight: f64,

    /// Weight of defensive funds.
    pub defense_weight: f64,

    /// Weight of high-volatility funds.
    pub high_beta_weight: f64,

    /// Core leg summaries.
    pub core_legs: Vec<CoreLegSummary>,

    /// Input rows discarded while loading.
    pub dropped_rows: usize,
}

impl Portfolio {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder() -> PortfolioBuilder {
        PortfolioBuilder::new()
    }

    /// Runs the full pipeline over holdings CSV text.
    ///
    /// Never fails: malformed rows are dropped and bad numbers default to 0.
    #[must_use]
    pub fn from_text(text: &str, classifier: &Classifier, as_of: NaiveDate) -> Self {
        let (records, dropped) = loader::parse_records(text);

        PortfolioBuilder::new()
            .as_of(as_of)
            .add_records(records)
            .dropped_rows(dropped)
            .build(classifier)
            .unwrap_or_else(|_| Self::empty(as_of))
    }

    /// An empty snapshot.
    #[must_use]
    pub fn empty(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            funds: Vec::new(),
            total_amount: 0.0,
            overseas_weight: 0.0,
            defense_weight: 0.0,
            high_beta_weight: 0.0,
            core_legs: Vec::new(),
            dropped_rows: 0,
        }
    }

    /// Returns the number of funds.
    #[must_use]
    pub fn fund_count(&self) -> usize {
        self.funds.len()
    }

    /// Returns true if the portfolio has no funds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }

    /// Sum of all fund weights: 1 when the total is positive, otherwise 0.
    #[must_use]
    pub fn weight_sum(&self) -> f64 {
        self.funds.iter().map(|f| f.record.current_weight).sum()
    }

    /// First fund whose name contains `keyword`.
    #[must_use]
    pub fn find(&self, keyword: &str) -> Option<&FundPosition> {
        self.funds.iter().find(|f| f.name().contains(keyword))
    }

    /// Funds carrying the given signal.
    pub fn funds_with_signal(&self, signal: Signal) -> impl Iterator<Item = &FundPosition> {
        self.funds.iter().filter(move |f| f.signal() == signal)
    }

    /// Funds whose signal calls for adding, most severe first.
    #[must_use]
    pub fn actionable(&self) -> Vec<&FundPosition> {
        let mut funds: Vec<&FundPosition> = self
            .funds
            .iter()
            .filter(|f| f.signal().is_actionable())
            .collect();
        funds.sort_by(|a, b| b.signal().cmp(&a.signal()));
        funds
    }

    /// Total weight held in an asset class.
    #[must_use]
    pub fn class_weight(&self, class: AssetClass) -> f64 {
        self.funds
            .iter()
            .filter(|f| f.asset_class() == class)
            .map(|f| f.record.current_weight)
            .sum()
    }

    /// Status line for a successful load.
    #[must_use]
    pub fn status_line(&self) -> StatusLine {
        StatusLine::Online {
            total_amount: self.total_amount,
        }
    }
}
