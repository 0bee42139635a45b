//! Behavioral specs for error reporting and exit codes.

use crate::prelude::*;

/// > A missing file is reported with its path and exits with the OS error code
#[test]
fn missing_landscape_reports_path() {
    pest_control_cmd()
        .args(["bug.txt", "missing.txt"])
        .current_dir(fixture("bugs"))
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("pest-control: missing.txt - "));
}

/// > A missing bug file is reported before the landscape is read
#[test]
fn missing_bug_file_reports_path() {
    pest_control_cmd()
        .args(["nobug.txt", "landscape.txt"])
        .current_dir(fixture("bugs"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("nobug.txt"));
}

/// > A directory cannot be searched
#[test]
fn directory_landscape_fails() {
    let temp = Project::empty();
    temp.file("bug.txt", "bug\n");
    std::fs::create_dir(temp.path().join("dir")).unwrap();

    pest_control_cmd()
        .args(["bug.txt", "dir"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("dir - "));
}

/// > An empty bug pattern is rejected
#[test]
fn empty_bug_is_rejected() {
    pest_control_cmd()
        .args(["empty.txt", "landscape.txt"])
        .current_dir(fixture("bugs"))
        .assert()
        .code(1)
        .stderr(predicates::str::contains("bug pattern is empty"));
}

/// > A malformed config file exits with code 2
#[test]
fn malformed_config_is_rejected() {
    let temp = Project::empty();
    temp.file("bug.txt", "bug\n")
        .file("land.txt", "a bug\n")
        .file("pest-control.toml", "[output\n");

    pest_control_cmd()
        .args(["bug.txt", "land.txt"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid config"));
}
