//! Behavioral specs for report formats and configuration.

use crate::prelude::*;

/// > --positions lists where every bug starts (1-based)
#[test]
fn positions_are_listed() {
    pest_control_cmd()
        .args(["--positions", "bug.txt", "landscape.txt"])
        .current_dir(fixture("bugs"))
        .assert()
        .success()
        .stdout(
            "Found 3 bugs in landscape.txt\n  line 1, column 1\n  line 1, column 12\n  line 5, column 4\n",
        );
}

/// > --output json prints a machine-readable summary
#[test]
fn json_output() {
    let output = pest_control_cmd()
        .args(["-o", "json", "bug.txt", "landscape.txt"])
        .current_dir(fixture("bugs"))
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["bugs"], 3);
    assert_eq!(value["file"], "landscape.txt");
    assert_eq!(value["matches"].as_array().unwrap().len(), 3);
}

/// > Output format can be set in pest-control.toml
#[test]
fn config_selects_json_output() {
    let temp = Project::empty();
    temp.file("bug.txt", "bug\n")
        .file("land.txt", "a bug, another bug\n")
        .file("pest-control.toml", "[output]\nformat = \"json\"\n");

    pest_control_cmd()
        .args(["bug.txt", "land.txt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("\"bugs\": 2"));
}

/// > Command-line flags override the config file
#[test]
fn flag_overrides_config() {
    let temp = Project::empty();
    temp.file("bug.txt", "bug\n")
        .file("land.txt", "a bug\n")
        .file("pest-control.toml", "[output]\nformat = \"json\"\n");

    pest_control_cmd()
        .args(["-o", "text", "bug.txt", "land.txt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Found 1 bugs in land.txt\n");
}

/// > An explicit --config file is used
#[test]
fn explicit_config_file() {
    let temp = Project::empty();
    temp.file("bug.txt", "bug\n")
        .file("land.txt", "bug\n")
        .file("custom.toml", "[output]\npositions = true\n");

    pest_control_cmd()
        .args(["--config", "custom.toml", "bug.txt", "land.txt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Found 1 bugs in land.txt\n  line 1, column 1\n");
}
