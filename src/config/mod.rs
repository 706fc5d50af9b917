use std::path::PathBuf;

pub use tracker_config::{AccessibilitySettings, Config, ConfigError, ConfigManager, Theme};

use crate::core::{
    errors::BudgetError,
    utils::{ensure_dir, PathResolver},
};

pub fn default_manager() -> Result<ConfigManager, BudgetError> {
    manager_with_base(PathResolver::base_dir())
}

pub fn manager_with_base(base: PathBuf) -> Result<ConfigManager, BudgetError> {
    ensure_dir(&base)?;
    Ok(ConfigManager::with_base_dir(base)?)
}
