//! End-to-end smoke tests driving the fintrack binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn no_args_prints_greeting() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("fintrack"));
}

#[test]
fn seeded_categories_are_listed() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Dining Out"));
}

#[test]
fn budget_reflects_income_and_rule() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["txn", "add", "income", "1000", "--description", "Paycheck"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction"));

    // 50/30/20 of $1000 income dated today
    fintrack(&dir)
        .arg("budget")
        .assert()
        .success()
        .stdout(predicate::str::contains("$500.00"))
        .stdout(predicate::str::contains("$300.00"))
        .stdout(predicate::str::contains("$200.00"));
}

#[test]
fn transactions_persist_across_invocations() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["txn", "add", "expense", "42.50", "--category", "Groceries"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$42.50"))
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn rule_selection_from_catalog() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["rule", "70/20/10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("70/20/10 Rule"));

    fintrack(&dir)
        .arg("rule")
        .assert()
        .success()
        .stdout(predicate::str::contains("* 70/20/10 Rule"));
}

#[test]
fn export_then_import_round_trips() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("snapshot.json");
    let file = file.to_str().unwrap();

    fintrack(&dir)
        .args(["bill", "add", "Netflix", "15.99", "28"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["export", file])
        .assert()
        .success();

    let other = TempDir::new().unwrap();
    fintrack(&other)
        .args(["import", file])
        .assert()
        .success();

    fintrack(&other)
        .args(["bill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Netflix"));
}

#[test]
fn erase_requires_confirmation_flag() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir).arg("erase").assert().failure();

    fintrack(&dir)
        .args(["erase", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data erased."));
}

#[test]
fn corrupt_snapshot_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("fintrack.json"), "{{ not json").unwrap();

    fintrack(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}
