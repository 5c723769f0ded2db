mod cli_support;

use cli_support::{assert_cli_success, card_bytes, run_cli, run_cli_json_value};
use std::fs;
use tempfile::TempDir;

const ENVS: &[(&str, &str)] = &[("RUST_LOG", "error")];

#[test]
fn inspect_prints_product_and_category() {
    let dir = TempDir::new().expect("create temp dir");
    let card = dir.path().join("card.png");
    fs::write(&card, card_bytes(&["【KoiKatuChara】".as_bytes()])).unwrap();

    let args = vec!["inspect".to_string(), card.to_string_lossy().to_string()];
    let output = run_cli(&args, ENVS);
    assert_cli_success(&output, &args);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("KK/chara"), "stdout:\n{}", stdout);
}

#[test]
fn inspect_json_reports_classification() {
    let dir = TempDir::new().expect("create temp dir");
    let card = dir.path().join("card.png");
    fs::write(&card, card_bytes(&["【PlayHome_Female】".as_bytes()])).unwrap();

    let args = vec![
        "inspect".to_string(),
        card.to_string_lossy().to_string(),
        "--json".to_string(),
    ];
    let report = run_cli_json_value(&args, ENVS);
    assert_eq!(report["product"], "PH");
    assert_eq!(report["category"], "female");
}

#[test]
fn inspect_json_reports_no_match_as_null() {
    let dir = TempDir::new().expect("create temp dir");
    let card = dir.path().join("card.png");
    fs::write(&card, card_bytes(&[])).unwrap();

    let args = vec![
        "inspect".to_string(),
        card.to_string_lossy().to_string(),
        "--json".to_string(),
    ];
    let report = run_cli_json_value(&args, ENVS);
    assert!(report["product"].is_null());
    assert!(report["category"].is_null());
}

#[test]
fn inspect_fails_on_missing_file() {
    let dir = TempDir::new().expect("create temp dir");
    let missing = dir.path().join("missing.png");

    let args = vec![
        "inspect".to_string(),
        missing.to_string_lossy().to_string(),
    ];
    let output = run_cli(&args, ENVS);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File not found"), "stderr:\n{}", stderr);
}
