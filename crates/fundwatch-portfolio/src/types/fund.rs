//! Fund records and classified positions.

use serde::{Deserialize, Serialize};

use super::{AssetClass, Signal, Suggestion};

/// Leading columns every data row must carry:
/// `FundName,Code,Cost,Shares,TargetWeight,CurrentValue,High_3m`.
pub const REQUIRED_COLUMNS: usize = 7;

/// Parses a numeric field, defaulting to `0.0`.
///
/// Surrounding whitespace is ignored. The longest leading number is read
/// (optional sign, digits, fraction, exponent) and anything after it is
/// dropped, so `"1.2元"` reads as `1.2`. A cell with no leading number, or
/// one that is not finite, yields `0.0`.
///
/// # Examples
///
/// ```
/// use fundwatch_portfolio::types::parse_or_default;
///
/// assert_eq!(parse_or_default(" 1.25 "), 1.25);
/// assert_eq!(parse_or_default("1.2元"), 1.2);
/// assert_eq!(parse_or_default("n/a"), 0.0);
/// assert_eq!(parse_or_default("NaN"), 0.0);
/// ```
#[must_use]
pub fn parse_or_default(field: &str) -> f64 {
    match numeric_prefix(field.trim()).parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Longest prefix of `s` shaped like a decimal float literal.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    &s[..end]
}

/// One holdings row.
///
/// The raw columns are set by [`FundRecord::from_row`]; `amount`, `drawdown`
/// and `current_weight` stay at their zero/`None` state until the metric
/// calculator runs over the full record set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FundRecord {
    /// Fund name; also the classification key.
    pub fund_name: String,

    /// Opaque fund code.
    pub code: String,

    /// Cost basis per share.
    pub cost: f64,

    /// Share count.
    pub shares: f64,

    /// Target weight (0-1). Informational only.
    pub target_weight: f64,

    /// Current price per share.
    pub current_value: f64,

    /// Trailing 3-month high price.
    pub high_3m: f64,

    /// Market value: `current_value * shares`.
    pub amount: f64,

    /// `current_value / high_3m - 1`, or `None` without a positive high and price.
    pub drawdown: Option<f64>,

    /// Share of total portfolio market value.
    pub current_weight: f64,
}

impl FundRecord {
    /// Creates a record from raw values with metrics unset.
    #[must_use]
    pub fn new(fund_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            fund_name: fund_name.into(),
            code: code.into(),
            ..Self::default()
        }
    }

    /// Sets the cost basis per share.
    #[must_use]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Sets the share count.
    #[must_use]
    pub fn with_shares(mut self, shares: f64) -> Self {
        self.shares = shares;
        self
    }

    /// Sets the target weight.
    #[must_use]
    pub fn with_target_weight(mut self, target_weight: f64) -> Self {
        self.target_weight = target_weight;
        self
    }

    /// Sets the current price.
    #[must_use]
    pub fn with_current_value(mut self, current_value: f64) -> Self {
        self.current_value = current_value;
        self
    }

    /// Sets the trailing 3-month high.
    #[must_use]
    pub fn with_high_3m(mut self, high_3m: f64) -> Self {
        self.high_3m = high_3m;
        self
    }

    /// Builds a record from one row of string columns.
    ///
    /// Columns are positional; extra trailing columns are ignored. Returns
    /// `None` when the row has fewer than [`REQUIRED_COLUMNS`] columns.
    #[must_use]
    pub fn from_row<S: AsRef<str>>(columns: &[S]) -> Option<Self> {
        if columns.len() < REQUIRED_COLUMNS {
            return None;
        }
        let field = |i: usize| columns[i].as_ref();

        Some(Self {
            fund_name: field(0).to_string(),
            code: field(1).to_string(),
            cost: parse_or_default(field(2)),
            shares: parse_or_default(field(3)),
            target_weight: parse_or_default(field(4)),
            current_value: parse_or_default(field(5)),
            high_3m: parse_or_default(field(6)),
            ..Self::default()
        })
    }

    /// Drawdown in percent (e.g. `-20.0`), if defined.
    #[must_use]
    pub fn drawdown_pct(&self) -> Option<f64> {
        self.drawdown.map(|dd| dd * 100.0)
    }

    /// Weight in percent.
    #[must_use]
    pub fn weight_pct(&self) -> f64 {
        self.current_weight * 100.0
    }

    /// Unrealized gain relative to cost, if a cost basis is known.
    #[must_use]
    pub fn unrealized_return(&self) -> Option<f64> {
        (self.cost > 0.0).then(|| self.current_value / self.cost - 1.0)
    }
}

/// Asset class and signal assigned to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Classification {
    /// Portfolio-role tag.
    pub asset_class: AssetClass,

    /// Action tag.
    pub signal: Signal,

    /// Suggestion text carried with the signal.
    pub suggestion: Suggestion,
}

/// A fully enriched record as held by a portfolio snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundPosition {
    /// The record with computed metrics.
    #[serde(flatten)]
    pub record: FundRecord,

    /// Its classification.
    #[serde(flatten)]
    pub classification: Classification,
}

impl FundPosition {
    /// Fund name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.fund_name
    }

    /// Asset class.
    #[must_use]
    pub fn asset_class(&self) -> AssetClass {
        self.classification.asset_class
    }

    /// Signal.
    #[must_use]
    pub fn signal(&self) -> Signal {
        self.classification.signal
    }

    /// Suggestion.
    #[must_use]
    pub fn suggestion(&self) -> Suggestion {
        self.classification.suggestion
    }
}
