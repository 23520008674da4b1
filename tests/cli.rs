//! Integration test: run the binary and check its report.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Config file that routes logs into the temp dir.
fn temp_config(name: &str, extra: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tabstrip_cli_{name}"));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let log_path = dir.join("tabstrip.log");
    let config_path = dir.join("config.toml");
    let contents = format!("log_file_path = {:?}\n{extra}", log_path.to_string_lossy());
    std::fs::write(&config_path, contents).expect("Failed to write config");
    config_path
}

fn run(config: &PathBuf, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tabstrip"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("TABSTRIP_ITEMS_PER_PAGE")
        .env_remove("TABSTRIP_MAX_ITEM_WIDTH")
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_tabstrip"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn fixed_row_text_report() {
    let config = temp_config("fixed", "");
    let output = run(&config, &["A", "B", "C", "D", "--width", "400"]);

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "container 400x60, fixed\n\
         policy width 100\n\
         content 400x60, offset 0\n\
         selected #1, indicator at 0 width 100\n\
         * #1 \"A\" x=0 w=100\n\
         * #2 \"B\" x=100 w=100\n\
         * #3 \"C\" x=200 w=100\n\
         * #4 \"D\" x=300 w=100\n"
    );
}

#[test]
fn config_file_enables_scrolling() {
    let config = temp_config("scroll", "scroll_enabled = true\nitems_per_page = 3.0\n");
    let titles = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];
    let mut args: Vec<&str> = titles.to_vec();
    args.push("--json");

    let output = run(&config, &args);

    assert!(output.status.success(), "{:?}", output);
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["scroll_enabled"], true);
    assert_eq!(report["policy_width"], 125.0);
    assert_eq!(report["content_size"]["width"], 1125.0);
    assert_eq!(report["items"].as_array().map(Vec::len), Some(9));
}

#[test]
fn json_report_reflects_selection_and_offset() {
    let config = temp_config("select", "");
    let output = run(
        &config,
        &[
            "Item1",
            "Item2WithLongTitle",
            "Item3",
            "Item4",
            "Item5",
            "--scroll",
            "--items-per-page",
            "3",
            "--select",
            "1",
            "--offset",
            "50",
            "--json",
        ],
    );

    assert!(output.status.success(), "{:?}", output);
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["selected"], 1);
    assert_eq!(report["content_offset_x"], 50.0);
    assert_eq!(report["items"][1]["width"], 196.0);
    assert_eq!(report["indicator"]["left"], 75.0);
    assert_eq!(report["indicator"]["width"], 196.0);
}

#[test]
fn invalid_config_fails() {
    let config = temp_config("invalid", "unknown_key = 1\n");
    let output = run(&config, &["A"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("ParseError"),
        "Expected a parse error, got: {}",
        stderr
    );
}
