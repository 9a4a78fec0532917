mod common;

use assert_cmd::Command;
use predicates::str::contains;

fn cli(base: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("monthly_budget_cli").unwrap();
    cmd.env("MONTHLY_BUDGET_HOME", base).env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    let base = common::setup_base_dir();
    cli(&base)
        .arg("help")
        .assert()
        .success()
        .stdout(contains("add-expense <amount> <category> <description...>"))
        .stdout(contains("new-month"));
}

#[test]
fn version_prints_build_metadata() {
    let base = common::setup_base_dir();
    cli(&base)
        .arg("version")
        .assert()
        .success()
        .stdout(contains("Monthly Budget"))
        .stdout(contains("Build hash"));
}

#[test]
fn entries_persist_between_invocations() {
    let base = common::setup_base_dir();
    cli(&base)
        .args(["add-expense", "42.5", "Food", "Weekly", "groceries"])
        .assert()
        .success()
        .stdout(contains("Weekly groceries 42.50 [Food]"));

    cli(&base)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Food: 42.50"));

    assert!(base.join("data").join("monthly-budget-data.json").exists());
    assert!(base.join("config").is_dir());
}

#[test]
fn unknown_command_exits_with_error() {
    let base = common::setup_base_dir();
    cli(&base)
        .arg("launch")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Unknown command `launch`"));
}

#[test]
fn bad_amount_exits_with_error() {
    let base = common::setup_base_dir();
    cli(&base)
        .args(["add-income", "lots", "Job", "Salary"])
        .assert()
        .failure()
        .stderr(contains("is not a number"));
}
