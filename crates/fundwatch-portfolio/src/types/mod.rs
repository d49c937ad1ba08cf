//! Domain types for fund portfolio analytics.
//!
//! - [`FundRecord`]: One holdings row with its derived metrics
//! - [`FundPosition`]: A record together with its [`Classification`]
//! - [`AssetClass`]: Portfolio-role tag derived from the fund name
//! - [`Signal`] / [`Suggestion`]: Drawdown-driven action tags
//! - [`RulesConfig`]: Editable keyword and threshold tables

mod asset_class;
mod config;
mod fund;
mod signal;

pub use asset_class::AssetClass;
pub(crate) use config::contains_any;
pub use config::{AssetClassRule, CoreLeg, ExposureRules, RulesConfig, ThresholdSet, Thresholds};
pub use fund::{parse_or_default, Classification, FundPosition, FundRecord, REQUIRED_COLUMNS};
pub use signal::{Signal, Suggestion};
