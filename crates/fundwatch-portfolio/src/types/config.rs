//! Classification rules: keyword tables and drawdown thresholds.
//!
//! All keyword matching is case-sensitive substring matching against the
//! fund name. The tables are plain data so they can be edited in a TOML
//! rules file without touching the classifier.

use serde::{Deserialize, Serialize};

use super::AssetClass;
use crate::{PortfolioError, PortfolioResult};

/// An asset class and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetClassRule {
    /// Class assigned on match.
    pub class: AssetClass,

    /// Name substrings that select this class.
    pub keywords: Vec<String>,
}

impl AssetClassRule {
    /// Creates a rule from a class and keyword list.
    #[must_use]
    pub fn new(class: AssetClass, keywords: &[&str]) -> Self {
        Self {
            class,
            keywords: to_strings(keywords),
        }
    }

    /// Returns true if `name` contains any of the rule's keywords.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        contains_any(name, &self.keywords)
    }
}

/// Drawdown thresholds in percent (negative numbers, inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// Watch at or below this drawdown.
    pub watch: f64,

    /// Buy at or below this drawdown.
    pub buy: f64,

    /// Strong buy at or below this drawdown.
    pub strong_buy: f64,
}

impl ThresholdSet {
    /// Standard thresholds: -3% / -5% / -7%.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            watch: -3.0,
            buy: -5.0,
            strong_buy: -7.0,
        }
    }

    /// Wider thresholds for high-volatility funds: -8% / -12% / -15%.
    #[must_use]
    pub fn high_beta() -> Self {
        Self {
            watch: -8.0,
            buy: -12.0,
            strong_buy: -15.0,
        }
    }

    fn validate(&self, label: &str) -> PortfolioResult<()> {
        let all = [self.watch, self.buy, self.strong_buy];
        if all.iter().any(|t| !t.is_finite() || *t > 0.0) {
            return Err(PortfolioError::invalid_rules(format!(
                "{label} thresholds must be finite and not positive"
            )));
        }
        if !(self.strong_buy <= self.buy && self.buy <= self.watch) {
            return Err(PortfolioError::invalid_rules(format!(
                "{label} thresholds must satisfy strong_buy <= buy <= watch"
            )));
        }
        Ok(())
    }
}

/// Threshold tables by asset class.
///
/// `Defense` has no table: defensive funds are never traded on drawdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Applied to `Core` funds.
    pub standard: ThresholdSet,

    /// Applied to `HighBeta` funds.
    pub high_beta: ThresholdSet,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            standard: ThresholdSet::standard(),
            high_beta: ThresholdSet::high_beta(),
        }
    }
}

/// Keyword lists for portfolio-level exposure weights.
///
/// Independent of asset classes: a fund may count toward several exposures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureRules {
    /// Overseas index funds (S&P 500, Nasdaq 100, Hang Seng Tech).
    pub overseas: Vec<String>,

    /// Defensive funds (dividend, bonds, gold).
    pub defense: Vec<String>,

    /// High-volatility funds (Hang Seng Tech, AI, robotics).
    pub high_beta: Vec<String>,
}

impl Default for ExposureRules {
    fn default() -> Self {
        Self {
            overseas: to_strings(&["标普", "纳指", "恒生科技"]),
            defense: to_strings(&["红利", "黄金", "AU9999", "债", "中债"]),
            high_beta: to_strings(&["恒生科技", "人工智能", "机器人"]),
        }
    }
}

/// A core leg tracked on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreLeg {
    /// Display label.
    pub label: String,

    /// The first fund whose name contains this keyword represents the leg.
    pub keyword: String,
}

impl CoreLeg {
    /// Creates a core leg.
    #[must_use]
    pub fn new(label: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            keyword: keyword.into(),
        }
    }
}

/// Complete rule set for classification and aggregation.
///
/// # Examples
///
/// ```
/// use fundwatch_portfolio::types::{RulesConfig, ThresholdSet};
///
/// let rules = RulesConfig::from_toml_str(
///     r#"
///     [thresholds.standard]
///     watch = -2.0
///     buy = -4.0
///     strong_buy = -6.0
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(rules.thresholds.standard.watch, -2.0);
/// assert_eq!(rules.thresholds.high_beta, ThresholdSet::high_beta());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Asset class rules in priority order; first match wins.
    pub asset_classes: Vec<AssetClassRule>,

    /// Drawdown thresholds.
    pub thresholds: Thresholds,

    /// Exposure keyword lists.
    pub exposures: ExposureRules,

    /// Core legs summarized on the dashboard.
    pub core_legs: Vec<CoreLeg>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            asset_classes: vec![
                AssetClassRule::new(
                    AssetClass::Core,
                    &["科创", "现金流", "自由现金流", "标普", "纳指"],
                ),
                AssetClassRule::new(
                    AssetClass::Defense,
                    &["红利", "AU9999", "黄金", "债", "中债"],
                ),
                AssetClassRule::new(AssetClass::HighBeta, &["人工智能", "机器人", "恒生科技"]),
            ],
            thresholds: Thresholds::default(),
            exposures: ExposureRules::default(),
            core_legs: vec![
                CoreLeg::new("STAR Market", "科创板"),
                CoreLeg::new("Free cash flow", "自由现金流"),
                CoreLeg::new("Dividend", "红利"),
            ],
        }
    }
}

impl RulesConfig {
    /// Creates the built-in rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses rules from TOML. Missing sections fall back to the built-in tables.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidRules`] if the TOML is malformed or
    /// the resulting rules fail [`RulesConfig::validate`].
    pub fn from_toml_str(content: &str) -> PortfolioResult<Self> {
        let rules: Self =
            toml::from_str(content).map_err(|e| PortfolioError::invalid_rules(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Serializes the rules to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidRules`] if serialization fails.
    pub fn to_toml_string(&self) -> PortfolioResult<String> {
        toml::to_string_pretty(self).map_err(|e| PortfolioError::invalid_rules(e.to_string()))
    }

    /// Replaces the asset class rule table.
    #[must_use]
    pub fn with_asset_classes(mut self, rules: Vec<AssetClassRule>) -> Self {
        self.asset_classes = rules;
        self
    }

    /// Replaces the threshold tables.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Replaces the exposure keyword lists.
    #[must_use]
    pub fn with_exposures(mut self, exposures: ExposureRules) -> Self {
        self.exposures = exposures;
        self
    }

    /// Replaces the core legs.
    #[must_use]
    pub fn with_core_legs(mut self, legs: Vec<CoreLeg>) -> Self {
        self.core_legs = legs;
        self
    }

    /// Validates the rules.
    ///
    /// Checks for:
    /// - Empty keywords (an empty keyword would match every fund)
    /// - Thresholds that are positive, non-finite, or out of order
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidRules`] describing the first problem.
    pub fn validate(&self) -> PortfolioResult<()> {
        for rule in &self.asset_classes {
            check_keywords(rule.class.code(), &rule.keywords)?;
        }
        check_keywords("overseas exposure", &self.exposures.overseas)?;
        check_keywords("defense exposure", &self.exposures.defense)?;
        check_keywords("high beta exposure", &self.exposures.high_beta)?;
        for leg in &self.core_legs {
            if leg.keyword.is_empty() {
                return Err(PortfolioError::invalid_rules(format!(
                    "core leg '{}' has an empty keyword",
                    leg.label
                )));
            }
        }

        self.thresholds.standard.validate("standard")?;
        self.thresholds.high_beta.validate("high_beta")?;
        Ok(())
    }
}

/// Returns true if `name` contains any of `keywords`.
pub(crate) fn contains_any(name: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| name.contains(k.as_str()))
}

fn check_keywords(label: &str, keywords: &[String]) -> PortfolioResult<()> {
    if keywords.iter().any(String::is_empty) {
        return Err(PortfolioError::invalid_rules(format!(
            "{label} rule has an empty keyword"
        )));
    }
    Ok(())
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(RulesConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_priority_order() {
        let rules = RulesConfig::default();
        let classes: Vec<AssetClass> = rules.asset_classes.iter().map(|r| r.class).collect();
        assert_eq!(
            classes,
            vec![AssetClass::Core, AssetClass::Defense, AssetClass::HighBeta]
        );
    }

    #[test]
    fn test_rule_matches_case_sensitive() {
        let rule = AssetClassRule::new(AssetClass::Defense, &["AU9999"]);
        assert!(rule.matches("黄金AU9999"));
        assert!(!rule.matches("黄金au9999"));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let rules = RulesConfig::default()
            .with_asset_classes(vec![AssetClassRule::new(AssetClass::Core, &[""])]);
        assert!(matches!(
            rules.validate(),
            Err(PortfolioError::InvalidRules { .. })
        ));
    }

    #[test]
    fn test_threshold_order_rejected() {
        let rules = RulesConfig::default().with_thresholds(Thresholds {
            standard: ThresholdSet {
                watch: -7.0,
                buy: -5.0,
                strong_buy: -3.0,
            },
            high_beta: ThresholdSet::high_beta(),
        });
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_positive_threshold_rejected() {
        let rules = RulesConfig::default().with_thresholds(Thresholds {
            standard: ThresholdSet {
                watch: 3.0,
                buy: -5.0,
                strong_buy: -7.0,
            },
            high_beta: ThresholdSet::high_beta(),
        });
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let rules = RulesConfig::default();
        let toml = rules.to_toml_string().unwrap();
        let parsed = RulesConfig::from_toml_str(&toml).unwrap();
        assert_eq!(parsed, rules);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let rules = RulesConfig::from_toml_str(
            r#"
            [[asset_classes]]
            class = "high_beta"
            keywords = ["半导体"]
            "#,
        )
        .unwrap();

        assert_eq!(rules.asset_classes.len(), 1);
        assert_eq!(rules.asset_classes[0].class, AssetClass::HighBeta);
        assert_eq!(rules.thresholds, Thresholds::default());
        assert_eq!(rules.exposures, ExposureRules::default());
        assert_eq!(rules.core_legs.len(), 3);
    }

    #[test]
    fn test_malformed_toml() {
        let err = RulesConfig::from_toml_str("asset_classes = 3").unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidRules { .. }));
    }
}
