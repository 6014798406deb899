//! Flattened output integration tests for tcp CLI.

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{TestFixture, list_files_recursive, report_lines};
use predicates::prelude::*;
use rstest::rstest;

#[test]
fn test_flatten_default_separator() {
    let fx = TestFixture::new();
    fx.create_tree(&[("top.txt", "t"), ("a/b/c.txt", "c"), ("a/d.txt", "d")]);

    let output = cargo_bin_cmd!("tcp")
        .arg(fx.src.path())
        .arg("-o")
        .arg(fx.out())
        .arg("--flatten")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory structure was flattened"))
        .get_output()
        .clone();

    assert_eq!(
        list_files_recursive(&fx.out()),
        vec!["a_b_c.txt", "a_d.txt", "top.txt"]
    );
    fx.assert_file_content(&fx.out().join("a_b_c.txt"), "c");

    // The report lists source-relative paths, not flattened names
    assert_eq!(
        report_lines(&output.stdout, "✓"),
        vec!["a/b/c.txt", "a/d.txt", "top.txt"]
    );
}

#[rstest]
#[case::dash("-", "a-b-c.txt")]
#[case::double_underscore("__", "a__b__c.txt")]
#[case::dot(".", "a.b.c.txt")]
#[case::empty("", "abc.txt")]
fn test_flatten_custom_separator(#[case] separator: &str, #[case] expected: &str) {
    let fx = TestFixture::new();
    fx.create_tree(&[("a/b/c.txt", "content")]);

    cargo_bin_cmd!("tcp")
        .arg(fx.src.path())
        .arg("-o")
        .arg(fx.out())
        .arg("--flatten")
        .arg(format!("--separator={separator}"))
        .assert()
        .success();

    assert_eq!(list_files_recursive(&fx.out()), vec![expected]);
    fx.assert_file_content(&fx.out().join(expected), "content");
}

#[test]
fn test_separator_without_flatten_is_ignored() {
    let fx = TestFixture::new();
    fx.create_tree(&[("a/b.txt", "b")]);

    cargo_bin_cmd!("tcp")
        .arg(fx.src.path())
        .arg("-o")
        .arg(fx.out())
        .arg("--separator")
        .arg("-")
        .assert()
        .success()
        .stdout(predicate::str::contains("flattened").not());

    assert_eq!(list_files_recursive(&fx.out()), vec!["a/b.txt"]);
}

#[test]
fn test_flatten_collision_last_processed_wins() {
    let fx = TestFixture::new();
    // Root files are processed before descending into `a/`
    fx.create_tree(&[("a_x.txt", "from root"), ("a/x.txt", "from a")]);

    cargo_bin_cmd!("tcp")
        .arg(fx.src.path())
        .arg("-o")
        .arg(fx.out())
        .arg("--flatten")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files copied: 2"));

    assert_eq!(list_files_recursive(&fx.out()), vec!["a_x.txt"]);
    fx.assert_file_content(&fx.out().join("a_x.txt"), "from a");
}

#[test]
fn test_flatten_applies_exclusions() {
    let fx = TestFixture::new();
    fx.create_tree(&[
        ("docs/guide.md", "g"),
        ("docs/node_modules/dep/readme.md", "r"),
        ("docs/debug.log", "l"),
    ]);

    cargo_bin_cmd!("tcp")
        .arg(fx.src.path())
        .arg("-o")
        .arg(fx.out())
        .arg("--flatten")
        .assert()
        .success();

    assert_eq!(list_files_recursive(&fx.out()), vec!["docs_guide.md"]);
}
