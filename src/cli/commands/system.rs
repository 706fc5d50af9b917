use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::style::format_header;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    io::println_text(&format_header(&format!("Budget Tracker {}", meta.version)))?;
    let rows = [
        ("CLI version", build_info::CLI_VERSION.to_string()),
        (
            "Build hash",
            format!("{} ({})", meta.git_hash, meta.git_status),
        ),
        ("Built at", meta.timestamp.to_string()),
        ("Target", meta.target.to_string()),
        ("Profile", meta.profile.to_string()),
        ("Rustc", meta.rustc.to_string()),
    ];
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
        io::println_text(&format!("  {:<width$}  {}", label, value, width = width))?;
    }
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry)?,
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    help::print_overview(&context.registry)?;
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
