use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::cli::ui::style::style;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputPreferences {
    pub plain_mode: bool,
    pub high_contrast_mode: bool,
    pub color_enabled: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            plain_mode: false,
            high_contrast_mode: false,
            color_enabled: true,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn build_label(kind: MessageKind, use_icons: bool) -> &'static str {
    match (kind, use_icons) {
        (MessageKind::Info, true) => "ℹ",
        (MessageKind::Success, true) => "✔",
        (MessageKind::Warning, true) => "⚠",
        (MessageKind::Error, true) => "✖",
        (MessageKind::Hint, true) => "→",
        (MessageKind::Info, false) => "INFO:",
        (MessageKind::Success, false) => "OK:",
        (MessageKind::Warning, false) => "WARNING:",
        (MessageKind::Error, false) => "ERROR:",
        (MessageKind::Hint, false) => "HINT:",
    }
}

/// Formats a message with its label and, when enabled, colour.
pub fn format_message(kind: MessageKind, message: impl fmt::Display) -> String {
    let ui = style();
    let prefs = current_preferences();
    let formatted = format!("{} {}", build_label(kind, ui.use_icons), message);

    if !ui.use_color {
        return formatted;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Success | MessageKind::Warning | MessageKind::Error => {
                formatted.bold().to_string()
            }
            _ => formatted,
        };
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Hint => formatted.dimmed().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    println!("{}", format_message(kind, message));
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}
