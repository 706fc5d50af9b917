mod common;

use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn coffee_and_rent_session() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin(
        "\
budget 100
add coffee 10
add rent 90
remove 1
status
exit
",
    )
    .assert()
    .success()
    .stdout(
        contains("Remaining: 90")
            .and(contains("Remaining: 0"))
            .and(contains("Status:    danger"))
            .and(contains("Removed coffee (10)."))
            .and(contains("Remaining: 10")),
    );
}

#[test]
fn eighty_spent_turns_indicator_to_danger() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin("budget 100\nadd groceries 80\nexit\n")
        .assert()
        .success()
        .stdout(contains("Remaining: 20").and(contains("Status:    danger")));
}

#[test]
fn half_spent_is_still_success_and_more_is_warning() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin("budget 100\nadd books 50\nstatus\nadd pen 1\nexit\n")
        .assert()
        .success()
        .stdout(contains("Status:    success").and(contains("Status:    warning")));
}

#[test]
fn negative_amount_is_rejected_with_message() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin("budget 100\nadd refund -5\nstatus\nexit\n")
        .assert()
        .success()
        .stdout(
            contains("Please enter a valid amount.")
                .and(contains("Remaining: 100"))
                .and(contains("Expense added.").not()),
        );
}

#[test]
fn missing_fields_report_which_one() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin("budget 100\nadd\nadd snack\nexit\n")
        .assert()
        .success()
        .stdout(
            contains("Please enter the expense name.").and(contains("Please enter the amount.")),
        );
}

#[test]
fn invalid_budget_restarts_session() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin("budget abc\nbudget 0\nadd coffee 10\nbudget 25\nstatus\nexit\n")
        .assert()
        .success()
        .stdout(
            contains("`abc` is not a valid budget.")
                .and(contains("The budget must be greater than zero."))
                .and(contains("No budget set"))
                .and(contains("Budget:    25")),
        );
}

#[test]
fn second_budget_requires_reset() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin("budget 100\nbudget 200\nreset\nbudget 200\nstatus\nexit\n")
        .assert()
        .success()
        .stdout(
            contains("already set")
                .and(contains("Budget session cleared."))
                .and(contains("Budget:    200")),
        );
}

#[test]
fn removing_unknown_row_leaves_ledger_unchanged() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin("budget 100\nadd coffee 10\nremove 7\nstatus\nexit\n")
        .assert()
        .success()
        .stdout(contains("nothing removed").and(contains("Remaining: 90")));
}

#[test]
fn snapshot_prints_ledger_json() {
    let (mut cmd, _home) = common::script_command();
    let output = cmd
        .write_stdin("budget 100\nadd \"coffee beans\" 12.5\nsnapshot\nexit\n")
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find("{\n").expect("json object in output");
    let end = stdout.rfind('}').expect("json end");
    let json: serde_json::Value = serde_json::from_str(&stdout[start..=end]).unwrap();
    assert_eq!(json["total_budget"], 100.0);
    assert_eq!(json["remaining"], 87.5);
    assert_eq!(json["expenses"][0]["concept"], "coffee beans");
}

#[test]
fn config_precision_applies_to_rendering_and_persists() {
    let (mut cmd, home) = common::script_command();
    cmd.write_stdin("config set amount_precision 2\nbudget 100\nadd tea 2.5\nexit\n")
        .assert()
        .success()
        .stdout(contains("Remaining: 97.50"));

    let stored = std::fs::read_to_string(home.path().join("config").join("config.json")).unwrap();
    assert!(stored.contains("\"amount_precision\": 2"));
}

#[test]
fn logs_stay_off_stdout() {
    let (mut cmd, _home) = common::script_command();
    cmd.env("RUST_LOG", "budget_tracker=debug")
        .write_stdin("budget 100\nadd coffee 10\nexit\n")
        .assert()
        .success()
        .stdout(contains("expense added").not())
        .stderr(contains("expense added"));
}
