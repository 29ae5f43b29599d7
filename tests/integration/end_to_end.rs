// tests/integration/end_to_end.rs
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cloc_summary"))
}

const MINIMAL_REPORT: &str = "\
File   blank  comment  code
---------------------------
main.c   2   3   10
---------------------------
Language   files  blank  comment  code
--------------------------------------
C      1   2   3   10
SUM:   1   2   3   10
";

#[test]
fn summarizes_minimal_report() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.c"), "int x;int y;").unwrap();

    bin()
        .arg("demo")
        .current_dir(dir.path())
        .write_stdin(MINIMAL_REPORT)
        .assert()
        .success()
        .stdout("demo: 10 0 0 10 2\n");
}

#[test]
fn reruns_are_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.c"), "int x;int y;").unwrap();

    for _ in 0..2 {
        bin()
            .arg("demo")
            .current_dir(dir.path())
            .write_stdin(MINIMAL_REPORT)
            .assert()
            .success()
            .stdout("demo: 10 0 0 10 2\n");
    }
}

#[test]
fn defaults_label_when_no_argument() {
    bin()
        .write_stdin("")
        .assert()
        .success()
        .stdout("<No Name>: 0 0 0 0 0\n");
}

#[test]
fn malformed_file_row_prints_diagnostic_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.c"), "a;").unwrap();

    let report = "\
File   blank  comment  code
---------------------------
main.c   2   3   10
this row has no counts
---------------------------
Language   files  blank  comment  code
--------------------------------------
C      1   2   3   10
SUM:   1   2   3   10
";

    bin()
        .arg("demo")
        .current_dir(dir.path())
        .write_stdin(report)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Error: Could not parse line \"this row has no counts\"")
                .and(predicate::str::contains("demo: 10 0 0 10 1")),
        );
}

#[test]
fn missing_listed_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    bin()
        .arg("demo")
        .current_dir(dir.path())
        .write_stdin(MINIMAL_REPORT)
        .assert()
        .failure()
        .stdout(predicate::str::contains("demo:").not())
        .stderr(predicate::str::contains("main.c"));
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cloc_summary"));
}

#[test]
fn shows_version() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
