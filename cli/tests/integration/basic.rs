//! Basic functionality integration tests for tcp CLI.

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{TestFixture, list_files_recursive, report_lines};
use predicates::prelude::*;

#[test]
fn test_mirrored_copy() {
    let fx = TestFixture::new();
    fx.create_tree(&[
        ("readme.md", "readme"),
        ("src/main.rs", "fn main() {}"),
        ("src/util/io.rs", "// io"),
    ]);

    let output = cargo_bin_cmd!("tcp")
        .arg(fx.src.path())
        .arg("--output-dir")
        .arg(fx.out())
        .assert()
        .success()
        .get_output()
        .clone();

    assert_eq!(
        list_files_recursive(&fx.out()),
        vec!["readme.md", "src/main.rs", "src/util/io.rs"]
    );
    fx.assert_file_content(&fx.out().join("src/util/io.rs"), "// io");

    assert_eq!(
        report_lines(&output.stdout, "✓"),
        vec!["readme.md", "src/main.rs", "src/util/io.rs"]
    );
    assert!(report_lines(&output.stdout, "✗").is_empty());
}

#[test]
fn test_report_totals_and_destination() {
    let fx = TestFixture::new();
    fx.create_tree(&[("a.txt", "a"), ("b/c.txt", "c")]);

    cargo_bin_cmd!("tcp")
        .arg(fx.src.path())
        .arg("-o")
        .arg(fx.out())
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully copied files:"))
        .stdout(predicate::str::contains("Total files copied: 2"))
        .stdout(predicate::str::contains("Total files failed: 0"))
        .stdout(predicate::str::contains(format!(
            "Files have been copied to: {}/",
            fx.out().display()
        )))
        .stdout(predicate::str::contains("Failed to copy:").not())
        .stdout(predicate::str::contains("flattened").not());
}

#[test]
fn test_default_output_dir_is_result() {
    let fx = TestFixture::new();
    fx.create_tree(&[("note.txt", "hi")]);

    cargo_bin_cmd!("tcp")
        .current_dir(fx.dst.path())
        .arg(fx.src.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files have been copied to: result/"));

    fx.assert_file_content(&fx.dst.path().join("result/note.txt"), "hi");
}

#[test]
fn test_output_dir_parents_created() {
    let fx = TestFixture::new();
    fx.create_tree(&[("x.txt", "x")]);
    let out = fx.dst.path().join("deep/er/out");

    cargo_bin_cmd!("tcp")
        .arg(fx.src.path())
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    fx.assert_file_content(&out.join("x.txt"), "x");
}

#[test]
fn test_rerun_overwrites() {
    let fx = TestFixture::new();
    fx.create_tree(&[("d/f.txt", "first")]);

    for _ in 0..2 {
        cargo_bin_cmd!("tcp")
            .arg(fx.src.path())
            .arg("-o")
            .arg(fx.out())
            .assert()
            .success()
            .stdout(predicate::str::contains("Total files copied: 1"));
    }

    fx.create_tree(&[("d/f.txt", "second")]);
    cargo_bin_cmd!("tcp")
        .arg(fx.src.path())
        .arg("-o")
        .arg(fx.out())
        .assert()
        .success();

    fx.assert_file_content(&fx.out().join("d/f.txt"), "second");
    assert_eq!(list_files_recursive(&fx.out()), vec!["d/f.txt"]);
}

#[test]
fn test_empty_source() {
    let fx = TestFixture::new();

    cargo_bin_cmd!("tcp")
        .arg(fx.src.path())
        .arg("-o")
        .arg(fx.out())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files copied: 0"));

    assert!(fx.out().is_dir());
}

#[test]
fn test_help_flag() {
    cargo_bin_cmd!("tcp")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tcp"))
        .stdout(predicate::str::contains("--flatten"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("tcp")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tcp"));
}

#[test]
fn test_missing_source_argument() {
    cargo_bin_cmd!("tcp").assert().failure().code(2);
}
