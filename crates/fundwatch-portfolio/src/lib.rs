//! # Fundwatch Portfolio
//!
//! Drawdown signals for a small fund portfolio.
//!
//! The crate is a linear pipeline over a holdings CSV:
//! parse → compute → classify → render.
//!
//! ## Design Philosophy
//!
//! - **Immutable snapshots**: each load produces an independent [`Portfolio`] value
//! - **Rules as data**: keyword tables and thresholds live in [`RulesConfig`]
//! - **Absorb, don't fail**: short rows are dropped, bad numbers become 0,
//!   zero totals give zero weights, missing highs give no drawdown
//! - **One failure**: only an unreadable source surfaces as an error
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fundwatch_portfolio::prelude::*;
//!
//! let csv = "FundName,Code,Cost,Shares,TargetWeight,CurrentValue,High_3m\n\
//!            科创板ETF,510300,1.0,1000,0.3,1.2,1.5\n\
//!            黄金ETF,518880,3.0,500,0.1,4.0,5.0\n";
//!
//! let classifier = Classifier::default();
//! let as_of = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let portfolio = Portfolio::from_text(csv, &classifier, as_of);
//!
//! assert_eq!(portfolio.funds[0].signal(), Signal::StrongBuy);
//! assert_eq!(portfolio.funds[1].suggestion(), Suggestion::HoldAndObserve);
//! ```
//!
//! ## Module Overview
//!
//! - [`loader`] - CSV text to rows
//! - [`metrics`] - Market value, weight, drawdown
//! - [`classify`] - Asset class, signal, exposures, core legs
//! - [`portfolio`] - Snapshot and builder
//! - [`source`] - Source and sink traits
//! - [`pipeline`] - One load cycle
//! - [`types`] - Records, tags, rules

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod classify;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod pipeline;
pub mod portfolio;
pub mod source;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use classify::{Classifier, CoreLegSummary, Exposures};
pub use pipeline::run_cycle;
pub use portfolio::{Portfolio, PortfolioBuilder, StatusLine};
pub use source::{FundSource, MemorySink, PresentationSink, StaticSource};
pub use types::{
    AssetClass, AssetClassRule, Classification, CoreLeg, ExposureRules, FundPosition, FundRecord,
    RulesConfig, Signal, Suggestion, ThresholdSet, Thresholds,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use fundwatch_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::classify::{Classifier, CoreLegSummary, Exposures};
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::pipeline::run_cycle;
    pub use crate::portfolio::{Portfolio, PortfolioBuilder, StatusLine};
    pub use crate::source::{FundSource, PresentationSink};
    pub use crate::types::{
        AssetClass, Classification, FundPosition, FundRecord, RulesConfig, Signal, Suggestion,
    };
}
