use std::fmt;
use std::io::{self, Write};

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::core::CommandError;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::ui::style::refresh_style;
use crate::config::{Config, Theme};

/// Pushes persisted preferences into the output and style layers.
pub fn apply_config(config: &Config) {
    output::set_preferences(OutputPreferences {
        plain_mode: config.accessibility.plain_output || config.theme == Theme::Plain,
        high_contrast_mode: config.accessibility.high_contrast,
        color_enabled: config.ui_color_enabled,
    });
    refresh_style();
}

pub fn println_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")
}

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Prompt the user for free-form text. Empty answers are returned as-is so
/// callers can report them with their own validation message.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)
}

/// Let the user pick one entry; `None` when the selection is cancelled.
pub fn select_item(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[String],
) -> Result<Option<usize>, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(CommandError::from)
}
