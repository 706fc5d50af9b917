use std::{
    io::IsTerminal,
    sync::{OnceLock, RwLock},
};

use colored::{Color, Colorize};

use crate::cli::output::current_preferences;

#[derive(Clone, Debug)]
pub struct UiStyle {
    pub header_prefix: String,
    pub horizontal: char,
    pub use_color: bool,
    pub color_header: Option<Color>,
    pub use_icons: bool,
}

static STYLE: OnceLock<RwLock<UiStyle>> = OnceLock::new();

pub fn style() -> UiStyle {
    STYLE
        .get_or_init(|| RwLock::new(UiStyle::detect()))
        .read()
        .map(|guard| guard.clone())
        .unwrap_or_else(|_| UiStyle::detect())
}

pub fn refresh_style() {
    if let Some(lock) = STYLE.get() {
        if let Ok(mut guard) = lock.write() {
            *guard = UiStyle::detect();
        }
    } else {
        let _ = STYLE.set(RwLock::new(UiStyle::detect()));
    }
}

impl UiStyle {
    fn detect() -> Self {
        let prefs = current_preferences();
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let plain_mode = prefs.plain_mode;
        let use_color = stdout_tty && prefs.color_enabled && !plain_mode && !no_color;

        Self {
            header_prefix: if plain_mode { "> ".into() } else { "⮞ ".into() },
            horizontal: if plain_mode { '-' } else { '─' },
            use_color,
            color_header: if use_color {
                Some(Color::BrightBlue)
            } else {
                None
            },
            use_icons: !plain_mode,
        }
    }

    pub fn horizontal_line(&self, width: usize) -> String {
        self.horizontal.to_string().repeat(width)
    }

    pub fn apply_header_style(&self, text: &str) -> String {
        if self.use_color {
            match self.color_header {
                Some(color) => text.color(color).bold().to_string(),
                None => text.bold().to_string(),
            }
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, title: &str) -> String {
        self.apply_header_style(&format!("{}{}", self.header_prefix, title))
    }

    pub fn apply_color(&self, text: &str, color: Color) -> String {
        if self.use_color {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn format_header(title: &str) -> String {
    style().header(title)
}
