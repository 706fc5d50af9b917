use serde::{de::Deserializer, Deserialize, Serialize};
use std::fmt;

use crate::ConfigError;

/// Stores user-configurable shell preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    /// Fixed number of decimals for amounts. `None` prints numbers as entered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_precision: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            accessibility: AccessibilitySettings::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            amount_precision: None,
        }
    }
}

impl Config {
    pub const KEYS: &'static [&'static str] = &[
        "theme",
        "ui_color_enabled",
        "plain_output",
        "high_contrast",
        "amount_precision",
    ];

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Applies a `config set <key> <value>` style update.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key.to_ascii_lowercase().as_str() {
            "theme" => self.theme = Theme::from_str(value),
            "ui_color_enabled" => self.ui_color_enabled = parse_bool(value).ok_or_else(invalid)?,
            "plain_output" => {
                self.accessibility.plain_output = parse_bool(value).ok_or_else(invalid)?
            }
            "high_contrast" => {
                self.accessibility.high_contrast = parse_bool(value).ok_or_else(invalid)?
            }
            "amount_precision" => {
                self.amount_precision = match value.trim().to_ascii_lowercase().as_str() {
                    "none" | "auto" => None,
                    other => Some(
                        other
                            .parse::<u8>()
                            .ok()
                            .filter(|precision| *precision <= 8)
                            .ok_or_else(invalid)?,
                    ),
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Key/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("theme", self.theme.to_string()),
            ("ui_color_enabled", self.ui_color_enabled.to_string()),
            ("plain_output", self.accessibility.plain_output.to_string()),
            ("high_contrast", self.accessibility.high_contrast.to_string()),
            (
                "amount_precision",
                self.amount_precision
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "auto".into()),
            ),
        ]
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    #[default]
    Iconic,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Theme::from_str(v.trim()))
            .unwrap_or_default()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Theme::Plain,
            _ => Theme::Iconic,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}
