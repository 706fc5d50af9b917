use std::io;

use crate::cli::io as cli_io;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::style::format_header;

pub fn print_overview(registry: &CommandRegistry) -> io::Result<()> {
    let entries = registry.list();
    let width = entries
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);
    cli_io::println_text(&format_header("Available commands"))?;
    for entry in entries {
        cli_io::println_text(&format!(
            "  {:<width$}  {}",
            entry.name,
            entry.description,
            width = width
        ))?;
    }
    cli_io::print_hint("Use `help <command>` for details.");
    Ok(())
}

pub fn print_command(entry: &CommandEntry) -> io::Result<()> {
    cli_io::println_text(&format_header(&format!("Help: {}", entry.name)))?;
    cli_io::println_text(&format!("  description  {}", entry.description))?;
    cli_io::println_text(&format!("  usage        {}", entry.usage))
}
