//! Behavioral specs for counting bugs.

use crate::prelude::*;

fn search(landscape: &str) -> assert_cmd::assert::Assert {
    pest_control_cmd()
        .args(["bug.txt", landscape])
        .current_dir(fixture("bugs"))
        .assert()
}

// =============================================================================
// Counting
// =============================================================================

/// > Bugs side by side and stacked are all counted
#[test]
fn counts_bugs_side_by_side_and_stacked() {
    search("landscape.txt")
        .success()
        .stdout("Found 3 bugs in landscape.txt\n");
}

/// > A bug whose bottom row is the next bug's top row counts twice
#[test]
fn counts_vertically_chained_bugs() {
    search("vertical.txt")
        .success()
        .stdout("Found 2 bugs in vertical.txt\n");
}

/// > Rows with spaces tolerate one changed character per space
#[test]
fn counts_camouflaged_bug() {
    search("camouflaged.txt")
        .success()
        .stdout("Found 1 bugs in camouflaged.txt\n");
}

/// > A bug cut off by the end of the landscape is not counted
#[test]
fn ignores_bug_cut_off_at_end() {
    search("truncated.txt")
        .success()
        .stdout("Found 0 bugs in truncated.txt\n");
}

/// > A landscape without bugs reports zero
#[test]
fn clean_landscape_reports_zero() {
    search("clean.txt").success().stdout("Found 0 bugs in clean.txt\n");
}

/// > An empty landscape reports zero
#[test]
fn empty_landscape_reports_zero() {
    search("empty.txt").success().stdout("Found 0 bugs in empty.txt\n");
}

// =============================================================================
// Arguments
// =============================================================================

/// > Only the last landscape path is searched; the others are reported
#[test]
fn extra_landscape_paths_are_ignored_with_warning() {
    pest_control_cmd()
        .args(["bug.txt", "clean.txt", "landscape.txt"])
        .current_dir(fixture("bugs"))
        .assert()
        .success()
        .stdout("Found 3 bugs in landscape.txt\n")
        .stderr(predicates::str::contains("ignoring clean.txt"));
}

/// > --debug prints diagnostics to stderr without changing stdout
#[test]
fn debug_logs_to_stderr() {
    search_with_debug()
        .success()
        .stdout("Found 3 bugs in landscape.txt\n")
        .stderr(predicates::str::contains("bug found"));
}

fn search_with_debug() -> assert_cmd::assert::Assert {
    pest_control_cmd()
        .args(["--debug", "bug.txt", "landscape.txt"])
        .current_dir(fixture("bugs"))
        .assert()
}
