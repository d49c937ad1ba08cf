//! # Fundwatch Ext File
//!
//! File-based inputs for Fundwatch:
//! - [`FileFundSource`]: reads a holdings CSV such as `FUND_BASE.csv`
//! - [`load_rules`]: reads a TOML rules file into a [`fundwatch_portfolio::RulesConfig`]

#![warn(missing_docs)]
#![warn(clippy::all)]

mod holdings;
mod rules;

pub use holdings::*;
pub use rules::*;

/// Default holdings file name.
pub const DEFAULT_HOLDINGS_FILE: &str = "FUND_BASE.csv";
