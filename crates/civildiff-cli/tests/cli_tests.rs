//! Integration tests for the `civildiff` CLI binary.
//!
//! These exercise the diff and apply subcommands through the actual binary,
//! including JSON output, policy selection, guard flags, and error paths.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn civildiff() -> Command {
    Command::cargo_bin("civildiff").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Diff subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn diff_multi_year_span() {
    civildiff()
        .args(["diff", "2017-07-14", "2024-01-24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 years, 6 months, 10 days"));
}

#[test]
fn diff_identical_dates() {
    civildiff()
        .args(["diff", "2020-01-01", "2020-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 years, 0 months, 0 days"));
}

#[test]
fn diff_json_output() {
    let output = civildiff()
        .args(["diff", "2024-02-29", "2025-02-28", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout must be valid JSON");
    assert_eq!(value["years"], 0);
    assert_eq!(value["months"], 11);
    assert_eq!(value["days"], 30);
}

#[test]
fn diff_clamp_policy_differs_from_default() {
    // Jan 31 + 1 month clamps to Feb 29 exactly, so one whole month fits.
    civildiff()
        .args(["diff", "2024-01-31", "2024-02-29", "--policy", "clamp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 years, 1 months, 0 days"));

    // The rollover default overshoots, so the span is all leftover days.
    civildiff()
        .args(["diff", "2024-01-31", "2024-02-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 years, 0 months, 29 days"));
}

#[test]
fn diff_inverted_range_fails() {
    civildiff()
        .args(["diff", "2024-01-15", "2024-01-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is after end date"));
}

#[test]
fn diff_year_out_of_range_fails() {
    civildiff()
        .args(["diff", "0000-01-01", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the supported range"));
}

#[test]
fn diff_span_guard_fails() {
    civildiff()
        .args([
            "diff",
            "1900-01-01",
            "2024-01-01",
            "--max-span-years",
            "100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the configured maximum"));
}

#[test]
fn diff_unparseable_date_fails() {
    civildiff()
        .args(["diff", "01/31/2024", "2024-02-29"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Apply subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn apply_reconstructs_end_date() {
    civildiff()
        .args(["apply", "2017-07-14", "6", "6", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-24"));
}

#[test]
fn apply_with_clamp_policy() {
    civildiff()
        .args(["apply", "2024-01-31", "0", "1", "0", "--policy", "clamp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02-29"));
}

#[test]
fn apply_huge_years_fails_cleanly() {
    // Must be a clean error on stderr, not a panic from the month policy.
    civildiff()
        .args(["apply", "2020-01-01", "999999", "0", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the supported range"));
}

#[test]
fn apply_months_overflowing_supported_range_fails_cleanly() {
    civildiff()
        .args(["apply", "9999-06-01", "0", "7", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the supported range"));
}

#[test]
fn apply_huge_days_fails_cleanly() {
    civildiff()
        .args(["apply", "2020-01-01", "0", "0", "99999999999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the supported civil range"));
}

#[test]
fn apply_at_upper_year_bound_succeeds() {
    civildiff()
        .args(["apply", "9998-12-31", "1", "0", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9999-12-31"));
}

#[test]
fn apply_negative_days_fails() {
    civildiff()
        .args(["apply", "2024-01-31", "0", "0", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip through both subcommands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn diff_then_apply_roundtrip() {
    let output = civildiff()
        .args(["diff", "2020-01-15", "2024-05-20", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let diff: serde_json::Value = serde_json::from_slice(&output).unwrap();

    civildiff()
        .args([
            "apply",
            "2020-01-15",
            &diff["years"].to_string(),
            &diff["months"].to_string(),
            &diff["days"].to_string(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-05-20"));
}
