//! Integration tests for fundwatch-portfolio.
//!
//! These tests run the full text → snapshot pipeline on realistic holdings.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use fundwatch_portfolio::prelude::*;
use fundwatch_portfolio::{MemorySink, StaticSource};

// =============================================================================
// TEST FIXTURES
// =============================================================================

const HEADER: &str = "FundName,Code,Cost,Shares,TargetWeight,CurrentValue,High_3m";

/// A realistic ten-fund holdings file with a BOM and CRLF endings.
fn holdings_csv() -> String {
    let rows = [
        "科创板50ETF,588000,1.05,20000,0.20,0.98,1.10",
        "自由现金流ETF,159201,1.00,15000,0.15,1.02,1.05",
        "红利低波ETF,512890,1.10,18000,0.15,1.12,1.15",
        "标普500ETF,513500,1.60,6000,0.10,1.75,1.80",
        "纳指100ETF,513100,1.30,5000,0.10,1.40,1.62",
        "恒生科技ETF,513180,0.60,10000,0.05,0.55,0.66",
        "人工智能ETF,159819,0.90,8000,0.05,0.88,0.95",
        "黄金ETF,518880,5.00,800,0.10,5.60,6.20",
        "十年国债ETF,511260,120.0,20,0.10,121.5,122.0",
        "半导体ETF,512480,1.00,3000,0.00,1.10,0",
    ];
    format!("\u{feff}{HEADER}\r\n{}\r\n", rows.join("\r\n"))
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn load(text: &str) -> Portfolio {
    Portfolio::from_text(text, &Classifier::default(), as_of())
}

// =============================================================================
// WORKED EXAMPLES
// =============================================================================

#[test]
fn star_market_row_is_core_strong_buy() {
    let text = format!("{HEADER}\n科创板ETF,510300,1.0,1000,0.3,1.2,1.5\n");
    let portfolio = load(&text);
    let fund = &portfolio.funds[0];

    assert_relative_eq!(fund.record.amount, 1200.0, max_relative = 1e-12);
    assert_relative_eq!(fund.record.drawdown.unwrap(), -0.2, epsilon = 1e-12);
    assert_eq!(fund.asset_class(), AssetClass::Core);
    assert_eq!(fund.signal(), Signal::StrongBuy);
    assert_eq!(fund.suggestion().text(), "aggressively add 1000–3000");
}

#[test]
fn gold_row_is_defense_hold_and_observe() {
    let text = format!("{HEADER}\n黄金ETF,518880,3.0,500,0.1,4.0,5.0\n");
    let portfolio = load(&text);
    let fund = &portfolio.funds[0];

    assert_relative_eq!(fund.record.drawdown.unwrap(), -0.2, epsilon = 1e-12);
    assert_eq!(fund.asset_class(), AssetClass::Defense);
    assert_eq!(fund.signal(), Signal::Normal);
    assert_eq!(fund.suggestion().text(), "hold and observe");
}

#[test]
fn short_row_does_not_affect_total() {
    let with_short = format!(
        "{HEADER}\n黄金ETF,518880,3.0,500,0.1,4.0,5.0\n短行,1,2,3,4,5\n"
    );
    let without = format!("{HEADER}\n黄金ETF,518880,3.0,500,0.1,4.0,5.0\n");

    let a = load(&with_short);
    let b = load(&without);

    assert_eq!(a.fund_count(), 1);
    assert_eq!(a.total_amount, b.total_amount);
    assert_eq!(a.dropped_rows, 1);
}

#[test]
fn all_zero_dataset_has_zero_weights() {
    let text = format!("{HEADER}\nA,1,0,0,0,0,0\nB,2,x,y,z,0,0\n");
    let portfolio = load(&text);

    assert_eq!(portfolio.total_amount, 0.0);
    assert!(portfolio.funds.iter().all(|f| f.record.current_weight == 0.0));
    assert_eq!(portfolio.weight_sum(), 0.0);
    assert_eq!(portfolio.defense_weight, 0.0);
}

#[test]
fn zero_high_is_insufficient_data() {
    let text = format!("{HEADER}\n沪深300ETF,510300,1.0,1000,0.3,1.2,0\n");
    let portfolio = load(&text);
    let fund = &portfolio.funds[0];

    assert_eq!(fund.record.drawdown, None);
    assert_eq!(fund.signal(), Signal::Normal);
    assert_eq!(fund.suggestion(), Suggestion::InsufficientData);
}

#[test]
fn overflowing_position_keeps_weights_consistent() {
    let text = format!("{HEADER}\nA,1,1,1e300,0,1e10,2e10\nB,2,1,10,0,1,1\n");
    let portfolio = load(&text);

    assert!(portfolio.total_amount.is_finite());
    assert_relative_eq!(portfolio.total_amount, 10.0);
    assert_eq!(portfolio.funds[0].record.amount, 0.0);
    assert_relative_eq!(portfolio.weight_sum(), 1.0, max_relative = 1e-12);
}

#[test]
fn numbers_with_trailing_units_are_read() {
    let text = format!("{HEADER}\n科创板ETF,510300,1.0元,1000份,0.3,1.2元,1.5元\n");
    let portfolio = load(&text);
    let fund = &portfolio.funds[0];

    assert_eq!(fund.record.current_value, 1.2);
    assert_eq!(fund.record.shares, 1000.0);
    assert_relative_eq!(fund.record.drawdown.unwrap(), -0.2, epsilon = 1e-12);
    assert_eq!(fund.signal(), Signal::StrongBuy);
}

// =============================================================================
// REALISTIC PORTFOLIO
// =============================================================================

#[test]
fn realistic_portfolio_signals() {
    let portfolio = load(&holdings_csv());
    assert_eq!(portfolio.fund_count(), 10);
    assert_eq!(portfolio.dropped_rows, 0);

    let signal = |kw: &str| portfolio.find(kw).unwrap().signal();

    // 0.98 / 1.10 - 1 = -10.9%, core
    assert_eq!(signal("科创板"), Signal::StrongBuy);
    // -2.9%, core
    assert_eq!(signal("自由现金流"), Signal::Normal);
    // defensive
    assert_eq!(signal("红利"), Signal::Normal);
    assert_eq!(signal("黄金"), Signal::Normal);
    assert_eq!(signal("国债"), Signal::Normal);
    // -13.6%, core (纳指 is a core keyword)
    assert_eq!(signal("纳指"), Signal::StrongBuy);
    // -16.7%, high beta
    assert_eq!(signal("恒生科技"), Signal::StrongBuy);
    // -7.4%, high beta
    assert_eq!(signal("人工智能"), Signal::Normal);
    // no high
    assert_eq!(
        portfolio.find("半导体").unwrap().suggestion(),
        Suggestion::InsufficientData
    );
}

#[test]
fn realistic_portfolio_aggregates() {
    let portfolio = load(&holdings_csv());

    assert_relative_eq!(portfolio.weight_sum(), 1.0, max_relative = 1e-9);

    let weight = |kw: &str| portfolio.find(kw).unwrap().record.current_weight;
    assert_relative_eq!(
        portfolio.overseas_weight,
        weight("标普") + weight("纳指") + weight("恒生科技"),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        portfolio.defense_weight,
        weight("红利") + weight("黄金") + weight("国债"),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        portfolio.high_beta_weight,
        weight("恒生科技") + weight("人工智能"),
        max_relative = 1e-12
    );

    let labels: Vec<&str> = portfolio.core_legs.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["STAR Market", "Free cash flow", "Dividend"]);
}

#[test]
fn custom_rules_change_classification() {
    let rules = RulesConfig::from_toml_str(
        r#"
        [[asset_classes]]
        class = "high_beta"
        keywords = ["半导体", "科创"]

        [thresholds.high_beta]
        watch = -20.0
        buy = -30.0
        strong_buy = -40.0
        "#,
    )
    .unwrap();
    let classifier = Classifier::new(rules).unwrap();
    let portfolio = Portfolio::from_text(&holdings_csv(), &classifier, as_of());

    let star = portfolio.find("科创板").unwrap();
    assert_eq!(star.asset_class(), AssetClass::HighBeta);
    assert_eq!(star.signal(), Signal::Normal);

    // Gold no longer matches any rule
    assert_eq!(portfolio.find("黄金").unwrap().asset_class(), AssetClass::Core);
}

#[test]
fn snapshot_serializes_to_json() {
    let portfolio = load(&holdings_csv());
    let json = serde_json::to_value(&portfolio).unwrap();

    assert_eq!(json["as_of"], "2025-01-15");
    assert_eq!(json["funds"].as_array().unwrap().len(), 10);
    assert_eq!(json["funds"][0]["signal"], "strong_buy");
    assert!(json["funds"][9]["drawdown"].is_null());
}

// =============================================================================
// PIPELINE
// =============================================================================

#[tokio::test]
async fn pipeline_renders_once() {
    let source = StaticSource::new("FUND_BASE.csv", holdings_csv());
    let mut sink = MemorySink::new();

    let portfolio = run_cycle(&source, &Classifier::default(), &mut sink, as_of())
        .await
        .unwrap();

    assert_eq!(sink.rendered, vec![portfolio]);
    assert!(sink.status.unwrap().to_string().starts_with("online"));
}

#[tokio::test]
async fn pipeline_reports_unavailable() {
    let source = StaticSource::unavailable("FUND_BASE.csv");
    let mut sink = MemorySink::new();

    let result = run_cycle(&source, &Classifier::default(), &mut sink, as_of()).await;

    assert!(result.unwrap_err().is_source_unavailable());
    assert!(sink.rendered.is_empty());
    assert!(sink
        .status
        .unwrap()
        .to_string()
        .contains("unable to read FUND_BASE.csv"));
}
