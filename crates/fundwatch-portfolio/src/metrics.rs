//! Market value, weight and drawdown metrics.
//!
//! Weights depend on the completed total, so [`enrich`] computes every
//! amount before assigning any weight.

use crate::types::FundRecord;

/// Market value of a position: `current_value * shares`, or `0.0` if the
/// product overflows.
#[must_use]
pub fn market_value(current_value: f64, shares: f64) -> f64 {
    finite_or_zero(current_value * shares)
}

/// Drawdown from the trailing high: `current_value / high - 1`.
///
/// Returns `None` unless both the price and the high are positive, so a
/// missing high never reads as a 0% or -100% drawdown. Also `None` if the
/// ratio overflows.
///
/// # Examples
///
/// ```
/// use fundwatch_portfolio::metrics::drawdown;
///
/// assert!((drawdown(1.2, 1.5).unwrap() + 0.2).abs() < 1e-12);
/// assert_eq!(drawdown(1.2, 0.0), None);
/// assert_eq!(drawdown(0.0, 1.5), None);
/// ```
#[must_use]
pub fn drawdown(current_value: f64, high: f64) -> Option<f64> {
    (current_value > 0.0 && high > 0.0)
        .then(|| current_value / high - 1.0)
        .filter(|dd| dd.is_finite())
}

/// Weight of `amount` in `total`, or `0.0` when the total is not a positive finite number.
#[must_use]
pub fn weight(amount: f64, total: f64) -> f64 {
    if total > 0.0 && total.is_finite() {
        amount / total
    } else {
        0.0
    }
}

/// Sum of market values, or `0.0` if the sum overflows.
#[must_use]
pub fn total_amount(records: &[FundRecord]) -> f64 {
    finite_or_zero(records.iter().map(|r| r.amount).sum())
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Computes amount, weight and drawdown for every record in place.
///
/// Returns the total market value.
pub fn enrich(records: &mut [FundRecord]) -> f64 {
    for record in records.iter_mut() {
        record.amount = market_value(record.current_value, record.shares);
    }

    let total = total_amount(records);

    for record in records.iter_mut() {
        record.current_weight = weight(record.amount, total);
        record.drawdown = drawdown(record.current_value, record.high_3m);
    }

    total
}
