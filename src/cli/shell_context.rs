use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    core::session::BudgetSession,
};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything one shell session owns: the budget session, preferences and
/// the command table.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: BudgetSession,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
}
