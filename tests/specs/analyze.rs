//! Behavioral specs for the analysis pass and exit codes.
//!
//! > Exit 0 on success with zero critical tests; exit 1 when critical
//! > tests are found or the pass fails.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn clean_history_reports_no_flaky_tests() {
    let temp = Project::empty();
    temp.history(&[("steady", &passes(10))]);

    flakewatch_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No flaky tests detected."));
}

#[test]
fn flaky_test_is_reported_and_exits_zero() {
    // Two recent failures over ten runs: flagged, but not critical.
    let temp = Project::empty();
    temp.history(&[("checkout-e2e", &then(passes(8), fails(2)))]);

    flakewatch_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("checkout-e2e spec"));
}

#[test]
fn critical_test_exits_one() {
    // Most recent quarter fully failing: consistently failing, critical.
    let temp = Project::empty();
    temp.history(&[("login-e2e", &then(passes(15), fails(5)))]);

    flakewatch_cmd()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("[CRITICAL]"));
}

#[test]
fn below_min_runs_is_excluded() {
    // Four runs, all failing, still under the default min of five.
    let temp = Project::empty();
    temp.history(&[("young", &fails(4))]);

    flakewatch_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No flaky tests detected."));
}

#[test]
fn below_threshold_is_excluded() {
    // 2 failures over 30 runs is 6.7%, under the default 10%.
    let temp = Project::empty();
    let mut outcomes = passes(30);
    outcomes[10] = true;
    outcomes[20] = true;
    temp.history(&[("mostly-fine", &outcomes)]);

    flakewatch_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No flaky tests detected."));
}

#[test]
fn missing_history_errors_and_exits_one() {
    let temp = Project::empty();

    flakewatch_cmd()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("failed to read run history"));
}

#[test]
fn unrecognized_flags_are_ignored() {
    let temp = Project::empty();
    temp.history(&[("steady", &passes(10))]);

    flakewatch_cmd()
        .args(["--frobnicate", "--widget=9"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No flaky tests detected."));
}

#[test]
fn unrecognized_flags_do_not_mask_recognized_ones() {
    let temp = Project::empty();
    temp.history(&[("login-e2e", &then(passes(15), fails(5)))]);

    flakewatch_cmd()
        .args(["--frobnicate", "--json"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("\"testId\""));
}

#[test]
fn invalid_threshold_errors_and_exits_one() {
    let temp = Project::empty();
    temp.history(&[("steady", &passes(10))]);

    flakewatch_cmd()
        .args(["--threshold", "7"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("invalid configuration"));
}

#[test]
fn stale_records_fall_outside_the_lookback_window() {
    let temp = Project::empty();
    temp.history_at(
        &[("old-flake", &then(passes(15), fails(5)))],
        chrono::Utc::now() - chrono::Duration::days(90),
    );

    // Default 30-day window sees nothing.
    flakewatch_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No flaky tests detected."));

    // A wider window picks the records back up.
    flakewatch_cmd()
        .args(["--lookback-days", "120"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("old-flake"));
}

#[test]
fn min_runs_flag_admits_short_histories() {
    let temp = Project::empty();
    let mut outcomes = passes(4);
    outcomes[0] = true;
    temp.history(&[("short", &outcomes)]);

    // Default min of five excludes it.
    flakewatch_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No flaky tests detected."));

    flakewatch_cmd()
        .args(["--min-runs", "4"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("short spec"));
}
