use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::core::errors::BudgetError;

const DEFAULT_DIR_NAME: &str = ".budget_tracker";
pub const HOME_ENV: &str = "BUDGET_TRACKER_HOME";

/// Resolves application directories.
pub struct PathResolver;

impl PathResolver {
    /// `$BUDGET_TRACKER_HOME` when set, otherwise `~/.budget_tracker`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }
}

pub fn ensure_dir(path: &Path) -> Result<(), BudgetError> {
    fs::create_dir_all(path)?;
    Ok(())
}
