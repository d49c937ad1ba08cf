//! End-to-end tests for the `fundwatch` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

const HOLDINGS: &str = "FundName,Code,Cost,Shares,TargetWeight,CurrentValue,High_3m\n\
                        科创板ETF,510300,1.0,1000,0.3,1.2,1.5\n\
                        黄金ETF,518880,3.0,500,0.1,4.0,5.0\n";

fn holdings_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn fundwatch() -> Command {
    let mut cmd = Command::cargo_bin("fundwatch").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("FUNDWATCH_RULES")
        .arg("--no-color");
    cmd
}

#[test]
fn show_renders_dashboard() {
    let file = holdings_file(HOLDINGS);

    fundwatch()
        .arg("show")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("¥3200.00"))
        .stdout(predicate::str::contains("科创板ETF"))
        .stdout(predicate::str::contains("aggressively add 1000–3000"))
        .stdout(predicate::str::contains("hold and observe"))
        .stdout(predicate::str::contains("STAR Market"))
        .stdout(predicate::str::contains("online · portfolio value ¥3200.00"));
}

#[test]
fn show_missing_file_reports_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("FUND_BASE.csv");

    fundwatch()
        .arg("show")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("data unavailable"))
        .stdout(predicate::str::contains("Holdings").not());
}

#[test]
fn show_json_is_parseable() {
    let file = holdings_file(HOLDINGS);

    let output = fundwatch()
        .args(["--format", "json", "show"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["funds"].as_array().unwrap().len(), 2);
    assert_eq!(value["funds"][0]["signal"], "strong_buy");
    assert_eq!(value["funds"][1]["asset_class"], "defense");
    assert!((value["total_amount"].as_f64().unwrap() - 3200.0).abs() < 1e-9);
}

#[test]
fn show_csv_has_one_row_per_fund() {
    let file = holdings_file(HOLDINGS);

    fundwatch()
        .args(["--format", "csv", "show"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("fund_name,code,asset_class"))
        .stdout(predicate::str::contains("科创板ETF,510300,core"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 3));
}

#[test]
fn signals_actionable_only() {
    let file = holdings_file(HOLDINGS);

    fundwatch()
        .args(["--format", "json", "signals", "--actionable"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("科创板ETF"))
        .stdout(predicate::str::contains("黄金ETF").not());
}

#[test]
fn signals_table_lists_every_fund() {
    let file = holdings_file(HOLDINGS);

    fundwatch()
        .arg("signals")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("strong"))
        .stdout(predicate::str::contains("黄金ETF"));
}

#[test]
fn rules_prints_toml() {
    fundwatch()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("[thresholds.standard]"))
        .stdout(predicate::str::contains("科创"));
}

#[test]
fn rules_as_csv_requires_thresholds() {
    fundwatch()
        .args(["--format", "csv", "rules"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be printed as CSV"))
        .stdout(predicate::str::contains("[thresholds.standard]").not());

    fundwatch()
        .args(["--format", "csv", "rules", "--thresholds"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("key,value"))
        .stdout(predicate::str::contains("Standard watch,-3%"));
}

#[test]
fn rules_file_changes_thresholds() {
    let rules = holdings_file(
        "[thresholds.standard]\nwatch = -1.0\nbuy = -2.0\nstrong_buy = -50.0\n",
    );
    let file = holdings_file(HOLDINGS);

    fundwatch()
        .args(["--format", "json", "signals"])
        .arg("--rules")
        .arg(rules.path())
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("add 300–500"));
}

#[test]
fn invalid_rules_file_fails() {
    let rules = holdings_file("[thresholds.standard]\nwatch = 5.0\n");

    fundwatch()
        .arg("--rules")
        .arg(rules.path())
        .arg("rules")
        .assert()
        .failure()
        .stderr(predicate::str::contains("rules file"));
}
