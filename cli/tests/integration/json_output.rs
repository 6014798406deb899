//! JSON output integration tests for tcp CLI.

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::TestFixture;
use serde_json::Value;
use std::fs;

fn parse_stdout(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("stdout should be a single JSON document")
}

#[test]
fn test_json_report() {
    let fx = TestFixture::new();
    fx.create_tree(&[("a/b.txt", "bb"), ("c.log", "log")]);

    let output = cargo_bin_cmd!("tcp")
        .arg(fx.src.path())
        .arg("-o")
        .arg(fx.out())
        .arg("--flatten")
        .arg("--separator=-")
        .arg("--output")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .clone();

    let doc = parse_stdout(&output.stdout);
    assert_eq!(doc["schema_version"], "1.0");
    assert_eq!(doc["mode"], "execute");
    assert_eq!(doc["copied"], serde_json::json!(["a/b.txt"]));
    assert_eq!(doc["failed"], serde_json::json!([]));
    assert_eq!(doc["totals"]["copied"], 1);
    assert_eq!(doc["totals"]["failed"], 0);
    assert_eq!(doc["totals"]["bytes_copied"], 2);
    assert_eq!(doc["flattened"], true);

    let options = &doc["effective_config"]["options"];
    assert_eq!(options["flatten"], true);
    assert_eq!(options["separator"], "-");
    assert!(
        options["ignored_patterns"]
            .as_array()
            .unwrap()
            .contains(&Value::from("*.log"))
    );
    assert_eq!(doc["effective_config"]["output_mode"], "json");
}

#[test]
fn test_json_report_with_failures() {
    let fx = TestFixture::new();
    fx.create_tree(&[("a/b.txt", "b"), ("ok.txt", "ok")]);
    fs::create_dir_all(fx.out().join("a_b.txt")).unwrap();

    let output = cargo_bin_cmd!("tcp")
        .arg(fx.src.path())
        .arg("-o")
        .arg(fx.out())
        .arg("--flatten")
        .arg("--output")
        .arg("json")
        .assert()
        .code(3)
        .get_output()
        .clone();

    let doc = parse_stdout(&output.stdout);
    assert_eq!(doc["copied"], serde_json::json!(["ok.txt"]));
    let failed = doc["failed"].as_array().unwrap();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0]["path"], "a/b.txt");
    assert_eq!(failed[0]["error_code"], "io_error");
    assert!(failed[0]["error_message"].as_str().unwrap().contains("a_b.txt"));
}

#[test]
fn test_json_fatal_error() {
    let fx = TestFixture::new();

    let output = cargo_bin_cmd!("tcp")
        .arg(fx.src.path().join("missing"))
        .arg("-o")
        .arg(fx.out())
        .arg("--output")
        .arg("json")
        .assert()
        .code(1)
        .get_output()
        .clone();

    let doc = parse_stdout(&output.stdout);
    assert_eq!(doc["error"]["error_code"], "source_not_found");
    assert!(doc.get("copied").is_none());
}
