//! End-to-end tests for the `csgreeks` binary.

use std::path::Path;
use std::process::{Command, Output};

use pricer_risk::sweep::COLUMNS;

fn csgreeks(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csgreeks"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("CSGREEKS_LOG_LEVEL")
        .env_remove("CSGREEKS_OUTPUT_DIR")
        .env_remove("CSGREEKS_FORMAT")
        .output()
        .expect("failed to launch csgreeks")
}

fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<f64>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|record| {
            record
                .unwrap()
                .iter()
                .map(|field| field.parse::<f64>().unwrap())
                .collect()
        })
        .collect();
    (headers, rows)
}

#[test]
fn test_sweep_writes_default_csv() {
    let dir = tempfile::tempdir().unwrap();
    let output = csgreeks(dir.path(), &["sweep", "--scenario", "atm-reference"]);
    assert!(output.status.success(), "{:?}", output);

    let path = dir.path().join("results").join("bs_fd_vs_complex_scenario1.csv");
    let (headers, rows) = read_csv(&path);
    assert_eq!(headers, COLUMNS);
    assert_eq!(rows.len(), 25);

    assert!((rows[0][0] / 1e-16 - 1.0).abs() < 1e-12);
    assert!((rows[24][0] / 1e-4 - 1.0).abs() < 1e-12);
    // Analytic Delta is repeated on every row
    assert!(rows.iter().all(|row| row[2] == rows[0][2]));
    assert!(!dir.path().join("results").join("bs_fd_vs_complex_scenario2.csv").exists());
}

#[test]
fn test_sweep_all_presets() {
    let dir = tempfile::tempdir().unwrap();
    let output = csgreeks(dir.path(), &["sweep", "--points", "5", "-o", "out"]);
    assert!(output.status.success(), "{:?}", output);

    for stem in ["bs_fd_vs_complex_scenario1", "bs_fd_vs_complex_scenario2"] {
        let (_, rows) = read_csv(&dir.path().join("out").join(format!("{}.csv", stem)));
        assert_eq!(rows.len(), 5);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Gamma CS (45°)"));
}

#[test]
fn test_sweep_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("custom.toml"),
        r#"
output_dir = "tables"
format = "json"

[grid]
points = 5
log10_min = -12.0
log10_max = -4.0

[[scenarios]]
name = "carry"
spot = 100.0
strike = 110.0
rate = 0.03
dividend_yield = 0.02
volatility = 0.25
expiry = 0.5
"#,
    )
    .unwrap();

    let output = csgreeks(dir.path(), &["--config", "custom.toml", "sweep"]);
    assert!(output.status.success(), "{:?}", output);

    let json = std::fs::read_to_string(dir.path().join("tables").join("carry.json")).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(rows.len(), 5);
    let delta = rows[0]["Delta_analytic"].as_f64().unwrap();
    assert!((delta - 0.33298958782082416).abs() < 1e-14);
}

#[test]
fn test_greeks_csv_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let output = csgreeks(
        dir.path(),
        &[
            "greeks",
            "--spot",
            "100",
            "--strike",
            "100",
            "--volatility",
            "0.2",
            "--expiry",
            "1",
            "--format",
            "csv",
        ],
    );
    assert!(output.status.success(), "{:?}", output);

    let mut reader = csv::Reader::from_reader(output.stdout.as_slice());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, COLUMNS);

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 1);
    let h_rel: f64 = records[0][0].parse().unwrap();
    let err_d_cs: f64 = records[0][6].parse().unwrap();
    assert_eq!(h_rel, 1e-8);
    assert!(err_d_cs < 1e-12);
}

#[test]
fn test_greeks_rejects_zero_volatility() {
    let dir = tempfile::tempdir().unwrap();
    let output = csgreeks(
        dir.path(),
        &[
            "greeks",
            "--spot",
            "100",
            "--strike",
            "100",
            "--volatility",
            "0",
            "--expiry",
            "1",
        ],
    );
    assert!(!output.status.success());
}

#[test]
fn test_check_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = csgreeks(dir.path(), &["check"]);
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration OK"));
    assert!(stdout.contains("atm-reference"));
}

#[test]
fn test_unknown_scenario_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = csgreeks(dir.path(), &["sweep", "--scenario", "nope"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = csgreeks(dir.path(), &["--config", "missing.toml", "check"]);
    assert!(!output.status.success());
}
