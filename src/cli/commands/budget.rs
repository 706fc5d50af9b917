use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "budget",
            "Set the total budget for this session",
            "budget <amount>",
            cmd_budget,
        ),
        CommandEntry::new(
            "status",
            "Show total, spent and remaining balance",
            "status",
            cmd_status,
        ),
        CommandEntry::new(
            "snapshot",
            "Print the current ledger as JSON",
            "snapshot",
            cmd_snapshot,
        ),
        CommandEntry::new(
            "reset",
            "Discard the ledger and start a new session",
            "reset",
            cmd_reset,
        ),
    ]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] if context.mode() == CliMode::Interactive => context.prompt_for_budget(),
        [] => context.start_budget(""),
        [amount] => context.start_budget(amount),
        _ => Err(CommandError::InvalidArguments(
            "usage: budget <amount>".into(),
        )),
    }
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render_budget()
}

fn cmd_snapshot(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let json = context.with_ledger(|ledger| Ok(serde_json::to_string_pretty(ledger)?))?;
    io::println_text(&json)?;
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.reset_session()
}
