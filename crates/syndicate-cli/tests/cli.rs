//! End-to-end tests for the `syndicate` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn syndicate() -> Command {
    let mut cmd = Command::cargo_bin("syndicate").unwrap();
    cmd.env_remove("SYNDICATE_REFERENCE_DATA");
    cmd
}

#[test]
fn test_price_table() {
    syndicate()
        .args([
            "price",
            "--company",
            "ABC Corporation",
            "--sector",
            "utility",
            "--rating",
            "AA",
            "--size",
            "500",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ABC Corporation"))
        .stdout(predicate::str::contains("5.100%"))
        .stdout(predicate::str::contains("Issue in EUR for lowest all-in cost"))
        .stdout(predicate::str::contains("65 bps"));
}

#[test]
fn test_price_json() {
    let output = syndicate()
        .args([
            "--format", "json", "price", "-s", "utility", "-r", "AA", "--size", "500",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["recommendations"]["optimal_currency"], "EUR");
    assert_eq!(json["currency_comparison"][2]["all_in_cost_percent"], 5.85);
    assert_eq!(
        json["financial_impact"]["recommendation"]["savings_vs_base_bps"],
        65
    );
}

#[test]
fn test_price_minimal() {
    syndicate()
        .args([
            "-f", "minimal", "price", "-s", "utility", "-r", "AA", "--size", "500",
        ])
        .assert()
        .success()
        .stdout("EUR 4.450%\n");
}

#[test]
fn test_price_csv_has_one_row_per_currency() {
    let output = syndicate()
        .args([
            "-f", "csv", "price", "-s", "bank", "-r", "A", "--size", "750", "-m", "busy_week",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("currency,"));
    assert!(lines[1].starts_with("GBP,"));
}

#[test]
fn test_price_strategies() {
    syndicate()
        .args([
            "price",
            "-s",
            "industrial",
            "-r",
            "BBB",
            "--size",
            "1000",
            "-m",
            "central_bank_meeting",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Consider waiting until after central bank meeting"))
        .stdout(predicate::str::contains("2x £500m deals"));
}

#[test]
fn test_price_rejects_unknown_sector() {
    syndicate()
        .args(["price", "-s", "retail", "-r", "AA", "--size", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("retail"));
}

#[test]
fn test_price_rejects_zero_size() {
    syndicate()
        .args(["price", "-s", "bank", "-r", "AA", "--size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deal size"));
}

#[test]
fn test_rates_json() {
    let output = syndicate().args(["-f", "json", "rates"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["GBP"], 4.0);
    assert_eq!(json["EUR"], 2.5);
    assert_eq!(json["USD"], 4.5);
}

#[test]
fn test_spreads_accepts_moodys_notation() {
    syndicate()
        .args(["spreads", "utility", "Aa2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100 bps"))
        .stdout(predicate::str::contains("105 bps"));
}

#[test]
fn test_options_lists_market_conditions() {
    syndicate()
        .args(["-q", "options"])
        .assert()
        .success()
        .stdout(predicate::str::contains("central_bank_meeting"))
        .stdout(predicate::str::contains("Quiet Week"));
}

#[test]
fn test_custom_tables() {
    let tables = include_str!("../../syndicate-pricing/data/standard_tables.toml")
        .replace("EUR = 2.5", "EUR = 3.0");
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", tables).unwrap();

    let output = syndicate()
        .args(["-f", "json", "--tables"])
        .arg(file.path())
        .arg("rates")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["EUR"], 3.0);
}

#[test]
fn test_missing_tables_file() {
    syndicate()
        .args(["--tables", "/nonexistent/tables.toml", "rates"])
        .assert()
        .failure();
}
