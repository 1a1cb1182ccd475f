//! End-to-end tests for Salesboard CLI commands.
//!
//! These tests run the binary against a scratch store directory and real
//! input files.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin for tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Test Helpers
// =============================================================================

/// Scratch directory holding a store and input files.
struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    fn store(&self) -> PathBuf {
        self.temp_dir.path().join("store")
    }

    fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write input file");
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// A `salesboard` command pointed at this workspace's store.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("salesboard").expect("Binary should build");
        cmd.env_remove("SALESBOARD_STORE")
            .arg("--store")
            .arg(self.store());
        cmd
    }
}

fn sales_csv() -> &'static str {
    "\
orderId,orderDate,productName,category,region,quantity,unitPrice,sales,profit
SO-1,2024-01-01,Desk,Furniture,East,2,450,900,90
SO-2,2024-01-01,Lamp,Furniture,East,4,50,200,30
SO-3,2024-01-02,Mouse,Electronics,West,10,25,250,40
SO-4,2024-01-03,Monitor,Electronics,North,1,300,300,60
"
}

fn report_json(ws: &Workspace, args: &[&str]) -> serde_json::Value {
    let output = ws
        .cmd()
        .arg("report")
        .arg("--json")
        .args(args)
        .output()
        .expect("Failed to run report");
    assert!(output.status.success(), "report failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("report --json should print JSON")
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read file")
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_replaces_stored_set() {
    let ws = Workspace::new();
    let input = ws.file("sales.csv", sales_csv());

    ws.cmd()
        .arg("load")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 records"));

    let json = report_json(&ws, &[]);
    assert_eq!(json["summary"]["orders"], 4);

    ws.cmd().arg("sample").assert().success();
    let json = report_json(&ws, &[]);
    assert_ne!(json["summary"]["orders"], 4);
}

#[test]
fn test_empty_store_falls_back_to_sample() {
    let ws = Workspace::new();
    let json = report_json(&ws, &[]);
    assert!(json["summary"]["orders"].as_u64().unwrap() > 0);
}

#[test]
fn test_clear_store() {
    let ws = Workspace::new();
    let input = ws.file("sales.csv", sales_csv());
    ws.cmd().arg("load").arg(&input).assert().success();

    ws.cmd()
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 4"));
    assert!(!ws.store().join("records.json").exists());
}

#[test]
fn test_unsupported_format_fails() {
    let ws = Workspace::new();
    let input = ws.file("sales.txt", "hello");

    ws.cmd()
        .arg("load")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

// =============================================================================
// Report
// =============================================================================

#[test]
fn test_report_text() {
    let ws = Workspace::new();
    let input = ws.file("sales.csv", sales_csv());

    ws.cmd()
        .arg("report")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Products by Quantity"))
        .stdout(predicate::str::contains("Mouse"))
        .stdout(predicate::str::contains("Sales by Region"));
}

#[test]
fn test_report_filters() {
    let ws = Workspace::new();
    let input = ws.file("sales.csv", sales_csv());
    let input = input.to_str().unwrap();

    let json = report_json(&ws, &["--input", input, "--category", "Furniture"]);
    assert_eq!(json["summary"]["orders"], 2);
    assert_eq!(json["regions"][0]["name"], "East");
    assert_eq!(json["regions"][0]["value"], 1100.0);
    assert_eq!(json["regions"][0]["share"], 1.0);

    let json = report_json(&ws, &["--input", input, "--from", "2024-01-02"]);
    assert_eq!(json["daily"].as_array().unwrap().len(), 2);
    // Facets come from the unfiltered set
    assert_eq!(json["facets"]["regions"].as_array().unwrap().len(), 3);
}

#[test]
fn test_report_daily_bucket() {
    let ws = Workspace::new();
    let input = ws.file("sales.csv", sales_csv());

    let json = report_json(&ws, &["--input", input.to_str().unwrap()]);
    let first = &json["daily"][0];
    assert_eq!(first["date"], "2024-01-01");
    assert_eq!(first["sales"], 1100.0);
    assert_eq!(first["profit"], 120.0);
    assert_eq!(first["revenue"], 980.0);
}

#[test]
fn test_report_compact_mode() {
    let ws = Workspace::new();
    ws.cmd().arg("sample").assert().success();

    let json = report_json(&ws, &["--compact"]);
    assert_eq!(json["mode"], "compact");

    let products = json["topProducts"].as_array().unwrap();
    assert_eq!(products.len(), 5);
    let quantities: Vec<u64> = products.iter().map(|p| p["quantity"].as_u64().unwrap()).collect();
    assert!(quantities.windows(2).all(|w| w[0] <= w[1]), "compact ranking is reversed");

    let regions = json["regions"].as_array().unwrap();
    assert_eq!(regions.len(), 5);
    assert_eq!(regions[4]["name"], "Other");
}

#[test]
fn test_report_compact_from_config() {
    let ws = Workspace::new();
    let config = ws.file("config.json", r#"{"compact": true}"#);

    let output = ws
        .cmd()
        .arg("--config")
        .arg(&config)
        .args(["report", "--json"])
        .output()
        .expect("Failed to run report");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["mode"], "compact");
}

#[test]
fn test_report_empty_state() {
    let ws = Workspace::new();
    let input = ws.file("sales.csv", sales_csv());

    ws.cmd()
        .arg("report")
        .arg("--input")
        .arg(&input)
        .args(["--region", "Atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records match"));
}

#[test]
fn test_report_inverted_range_is_empty() {
    let ws = Workspace::new();
    let input = ws.file("sales.csv", sales_csv());

    let json = report_json(
        &ws,
        &["--input", input.to_str().unwrap(), "--from", "2024-01-03", "--to", "2024-01-01"],
    );
    assert_eq!(json["summary"]["orders"], 0);
    assert!(json["daily"].as_array().unwrap().is_empty());
}

#[test]
fn test_report_rejects_bad_date() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["report", "--from", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

// =============================================================================
// Facets and export
// =============================================================================

#[test]
fn test_facets() {
    let ws = Workspace::new();
    let input = ws.file("sales.csv", sales_csv());

    ws.cmd()
        .arg("facets")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Electronics"))
        .stdout(predicate::str::contains("Furniture"))
        .stdout(predicate::str::contains("North"));
}

#[test]
fn test_export_filtered_csv() {
    let ws = Workspace::new();
    let input = ws.file("sales.csv", sales_csv());
    let output = ws.path("out.csv");

    ws.cmd()
        .arg("export")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--region", "East"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 4"));

    let text = read(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.starts_with('"') && line.ends_with('"')));
    assert!(lines[1].contains("\"Desk\""));
}
