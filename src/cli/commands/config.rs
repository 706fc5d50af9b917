use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::style::format_header;
use crate::config::Config;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change display preferences",
        "config [show | set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => show_config(context),
        ["set", key, value] => set_config(context, key, value),
        ["set", ..] => Err(CommandError::InvalidArguments(format!(
            "usage: config set <key> <value> (keys: {})",
            Config::KEYS.join(", ")
        ))),
        [other, ..] => Err(CommandError::InvalidArguments(format!(
            "unknown config subcommand `{}`",
            other
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    io::println_text(&format_header("Configuration"))?;
    let entries = context.config.entries();
    let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in entries {
        io::println_text(&format!("  {:<width$}  {}", key, value, width = width))?;
    }
    io::print_hint(format!(
        "Stored at {}",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

fn set_config(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated
        .set_value(key, value)
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
    context.config = updated;
    context.persist_config()?;
    io::apply_config(&context.config);
    io::print_success(format!("Set `{}` to `{}`.", key, value));
    Ok(())
}
