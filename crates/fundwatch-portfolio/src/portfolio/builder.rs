//! Portfolio builder for fluent construction.

use chrono::NaiveDate;
use tracing::debug;

use crate::classify::Classifier;
use crate::metrics;
use crate::types::{FundPosition, FundRecord};
use crate::{Portfolio, PortfolioError, PortfolioResult};

/// Builder for constructing a [`Portfolio`] snapshot.
///
/// Records are added raw; [`PortfolioBuilder::build`] runs the metric
/// calculator over the full set, then classifies and aggregates.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fundwatch_portfolio::prelude::*;
///
/// let portfolio = PortfolioBuilder::new()
///     .as_of(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
///     .add_record(
///         FundRecord::new("科创板ETF", "588000")
///             .with_shares(1000.0)
///             .with_current_value(1.2)
///             .with_high_3m(1.5),
///     )
///     .build(&Classifier::default())
///     .unwrap();
///
/// assert_eq!(portfolio.total_amount, 1200.0);
/// assert_eq!(portfolio.funds[0].signal(), Signal::StrongBuy);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    as_of: Option<NaiveDate>,
    records: Vec<FundRecord>,
    dropped_rows: usize,
}

impl PortfolioBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the as-of date.
    #[must_use]
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Adds a record.
    #[must_use]
    pub fn add_record(mut self, record: FundRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Adds multiple records.
    #[must_use]
    pub fn add_records(mut self, records: impl IntoIterator<Item = FundRecord>) -> Self {
        self.records.extend(records);
        self
    }

    /// Sets the number of input rows discarded while loading.
    #[must_use]
    pub fn dropped_rows(mut self, count: usize) -> Self {
        self.dropped_rows = count;
        self
    }

    /// Builds the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::MissingField`] if no as-of date was set.
    pub fn build(self, classifier: &Classifier) -> PortfolioResult<Portfolio> {
        let as_of = self
            .as_of
            .ok_or_else(|| PortfolioError::missing_field("as_of"))?;

        let mut records = self.records;
        let total_amount = metrics::enrich(&mut records);

        let funds: Vec<FundPosition> = records
            .into_iter()
            .map(|record| {
                let classification = classifier.classify(&record);
                FundPosition {
                    record,
                    classification,
                }
            })
            .collect();

        let exposures = classifier.exposures(&funds);
        let core_legs = classifier.core_legs(&funds);

        debug!(
            funds = funds.len(),
            dropped = self.dropped_rows,
            total_amount,
            "built portfolio snapshot"
        );

        Ok(Portfolio {
            as_of,
            funds,
            total_amount,
            overseas_weight: exposures.overseas,
            defense_weight: exposures.defense,
            high_beta_weight: exposures.high_beta,
            core_legs,
            dropped_rows: self.dropped_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_missing_as_of() {
        let result = PortfolioBuilder::new().build(&Classifier::default());
        assert!(matches!(result, Err(PortfolioError::MissingField { .. })));
    }

    #[test]
    fn test_empty_build() {
        let portfolio = PortfolioBuilder::new()
            .as_of(date())
            .build(&Classifier::default())
            .unwrap();
        assert!(portfolio.is_empty());
        assert_eq!(portfolio.total_amount, 0.0);
        assert_eq!(portfolio.overseas_weight, 0.0);
        assert!(portfolio.core_legs.is_empty());
    }

    #[test]
    fn test_build_keeps_order_and_dropped() {
        let portfolio = PortfolioBuilder::new()
            .as_of(date())
            .add_records(vec![
                FundRecord::new("B", "2").with_shares(1.0).with_current_value(1.0),
                FundRecord::new("A", "1").with_shares(1.0).with_current_value(3.0),
            ])
            .dropped_rows(3)
            .build(&Classifier::default())
            .unwrap();

        assert_eq!(portfolio.funds[0].name(), "B");
        assert_eq!(portfolio.funds[1].name(), "A");
        assert_eq!(portfolio.dropped_rows, 3);
        assert!((portfolio.funds[1].record.current_weight - 0.75).abs() < 1e-12);
    }
}
