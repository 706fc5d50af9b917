use assert_cmd::Command;
use tempfile::TempDir;

pub const BIN_NAME: &str = "budget_tracker_cli";

/// Script-mode command with an isolated home directory. Keep the returned
/// guard alive for the duration of the test.
pub fn script_command() -> (Command, TempDir) {
    let home = TempDir::new().expect("create temp home");
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BUDGET_TRACKER_CLI_SCRIPT", "1")
        .env("BUDGET_TRACKER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    (cmd, home)
}
