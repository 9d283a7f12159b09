//! Behavioral specs for configuration layering, validation, and the
//! flagged-tests store.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn config_file_raises_threshold() {
    let temp = Project::empty();
    temp.config("failure_threshold = 0.5\n");
    // 30% failure rate: flagged under defaults, excluded at 0.5.
    temp.history(&[("t1", &then(passes(7), fails(3)))]);

    flakewatch_cmd()
        .current_dir(temp.path())
        .assert()
        .stdout(predicates::str::contains("No flaky tests detected."));
}

#[test]
fn cli_flag_overrides_config_file() {
    let temp = Project::empty();
    temp.config("failure_threshold = 0.5\n");
    temp.history(&[("t1", &then(passes(7), fails(3)))]);

    flakewatch_cmd()
        .args(["--threshold", "0.2"])
        .current_dir(temp.path())
        .assert()
        .stdout(predicates::str::contains("t1 spec"));
}

#[test]
fn unknown_config_key_fails() {
    let temp = Project::empty();
    temp.config("frobnicate = true\n");
    temp.history(&[("steady", &passes(10))]);

    flakewatch_cmd()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("unknown field"));
}

#[test]
fn out_of_range_config_threshold_fails() {
    let temp = Project::empty();
    temp.config("failure_threshold = 3.0\n");
    temp.history(&[("steady", &passes(10))]);

    flakewatch_cmd()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("invalid configuration"));
}

#[test]
fn store_is_written_by_default() {
    let temp = Project::empty();
    temp.history(&[("login-e2e", &then(passes(15), fails(5)))]);

    flakewatch_cmd().current_dir(temp.path()).assert().code(1);

    let store = temp.flagged_store().expect("store should exist");
    assert_eq!(store["login-e2e"]["severity"], "critical");
}

#[test]
fn no_update_skips_the_store() {
    let temp = Project::empty();
    temp.history(&[("login-e2e", &then(passes(15), fails(5)))]);

    flakewatch_cmd()
        .arg("--no-update")
        .current_dir(temp.path())
        .assert()
        .code(1);

    assert!(temp.flagged_store().is_none());
}

#[test]
fn store_upserts_across_passes() {
    let temp = Project::empty();

    temp.history(&[("first-flake", &then(passes(15), fails(5)))]);
    flakewatch_cmd().current_dir(temp.path()).assert().code(1);

    // A later pass flags a different test; the earlier entry stays.
    temp.history(&[("second-flake", &then(passes(15), fails(5)))]);
    flakewatch_cmd().current_dir(temp.path()).assert().code(1);

    let store = temp.flagged_store().expect("store should exist");
    assert!(store.get("first-flake").is_some());
    assert!(store.get("second-flake").is_some());
}

#[test]
fn store_failure_does_not_change_exit_code() {
    let temp = Project::empty();
    temp.history(&[("steady-flake", &then(passes(8), fails(2)))]);
    // Occupy the store path with a directory so the write fails.
    std::fs::create_dir_all(temp.path().join(".flakewatch/flagged.json")).unwrap();

    flakewatch_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("steady-flake spec"));
}
