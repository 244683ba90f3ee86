use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_find_file_pairs"))
}

fn touch_all(root: &std::path::Path, files: &[&str]) {
    for rel in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--source-pattern").and(predicate::str::contains("--use-relative-paths")));
}

#[test]
fn missing_required_arguments_fail() {
    bin().args(["--data-path", "."]).assert().failure();
}

#[test]
fn writes_relative_manifest() {
    let dir = tempfile::tempdir().unwrap();
    touch_all(dir.path(), &["a/s.pdf", "a/s.xml"]);
    let out = dir.path().join("lists/pairs.csv");

    bin()
        .arg("--data-path")
        .arg(dir.path())
        .args(["--source-pattern", "*/*.pdf", "--xml-pattern", "*/*.xml", "--use-relative-paths"])
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), "source_url,xml_url\na/s.pdf,a/s.xml\n");
}

#[test]
fn mismatch_exits_non_zero_without_output() {
    let dir = tempfile::tempdir().unwrap();
    touch_all(dir.path(), &["x/doc1.pdf", "z/doc1.pdf", "y/doc1.xml"]);
    let out = dir.path().join("pairs.tsv");

    bin()
        .arg("--data-path")
        .arg(dir.path())
        .args(["--source-pattern", "*/*.pdf", "--xml-pattern", "*/*.xml", "-q"])
        .arg("--out")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no exclusively matching files for 'doc1'"));

    assert!(!out.exists());
}

#[test]
fn rejects_zero_limit() {
    bin()
        .args(["--data-path", ".", "--source-pattern", "*.pdf", "--xml-pattern", "*.xml", "--out", "x.csv"])
        .args(["--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--limit"));
}
