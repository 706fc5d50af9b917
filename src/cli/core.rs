//! Core CLI loop, dispatch, and shell context helpers.

use std::io;

use strsim::levenshtein;
use tracker_domain::{Displayable, Ledger};

use crate::{
    config::{self, ConfigManager},
    core::errors::{BudgetError, ValidationError},
    core::services::{ExpenseSelector, ExpenseService, ServiceError, SummaryService},
};

pub use crate::core::errors::CliError;

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};
use super::ui::{style::style, BudgetView};

const BUDGET_PROMPT: &str = "What is your budget?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = config::default_manager()?;
        Self::with_config_manager(mode, config_manager)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        cli_io::apply_config(&config);

        Ok(ShellContext {
            mode,
            registry,
            session: Default::default(),
            theme: Default::default(),
            config_manager,
            config,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        match self.session.current() {
            Some(ledger) => format!(
                "budget [{} left]> ",
                self.view().format_amount(ledger.remaining())
            ),
            None => "budget> ".to_string(),
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err);
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit budget tracker?", true).map_err(CliError::from)
    }

    /// Reports a failed command. Only terminal failures propagate; everything
    /// else becomes a message and the loop keeps going.
    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::Validation(validation) => {
                cli_io::print_error(validation);
                Ok(())
            }
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::BudgetNotSet => {
                cli_io::print_error(CommandError::BudgetNotSet);
                cli_io::print_hint("Try `budget 100` to get started.");
                Ok(())
            }
            CommandError::Io(err) if self.mode == CliMode::Interactive => {
                Err(CliError::Command(err.to_string()))
            }
            other => {
                cli_io::print_error(other);
                Ok(())
            }
        }
    }

    pub(crate) fn view(&self) -> BudgetView {
        BudgetView::new(self.config.amount_precision)
    }

    pub(crate) fn with_ledger<T>(
        &self,
        f: impl FnOnce(&Ledger) -> Result<T, CommandError>,
    ) -> Result<T, CommandError> {
        self.session.with_current(f)?
    }

    pub(crate) fn with_ledger_mut<T>(
        &mut self,
        f: impl FnOnce(&mut Ledger) -> Result<T, CommandError>,
    ) -> Result<T, CommandError> {
        self.session.with_current_mut(f)?
    }

    pub(crate) fn render_budget(&self) -> CommandResult {
        let view = self.view();
        let rendered = self.with_ledger(|ledger| {
            Ok(view.render_budget(&SummaryService::summarize(ledger), &style()))
        })?;
        cli_io::println_text(&rendered)?;
        Ok(())
    }

    pub(crate) fn render_expenses(&self) -> CommandResult {
        let view = self.view();
        let rendered =
            self.with_ledger(|ledger| Ok(view.render_expenses(ledger.expenses(), &style())))?;
        cli_io::println_text(&rendered)?;
        Ok(())
    }

    /// Re-renders the list and the remaining balance after a mutation.
    pub(crate) fn render_after_mutation(&self) -> CommandResult {
        let view = self.view();
        let ui = style();
        let rendered = self.with_ledger(|ledger| {
            let summary = SummaryService::summarize(ledger);
            Ok(format!(
                "{}\n{}",
                view.render_expenses(ledger.expenses(), &ui),
                view.render_remaining(&summary, &ui)
            ))
        })?;
        cli_io::println_text(&rendered)?;
        Ok(())
    }

    pub(crate) fn start_budget(&mut self, raw: &str) -> CommandResult {
        self.session.start(raw)?;
        self.render_budget()
    }

    /// Asks for a budget until a valid one is given.
    pub(crate) fn prompt_for_budget(&mut self) -> CommandResult {
        if self.session.is_active() {
            return Err(CommandError::from(BudgetError::BudgetAlreadySet));
        }
        loop {
            let raw = cli_io::prompt_text(&self.theme, BUDGET_PROMPT)?;
            match self.start_budget(&raw) {
                Err(CommandError::Validation(err)) => {
                    cli_io::print_error(err);
                    cli_io::print_info("Starting over.");
                }
                other => return other,
            }
        }
    }

    pub(crate) fn reset_session(&mut self) -> CommandResult {
        self.session.reset();
        cli_io::print_info("Budget session cleared.");
        if self.mode == CliMode::Interactive {
            return self.prompt_for_budget();
        }
        Ok(())
    }

    pub(crate) fn add_expense(&mut self, concept: &str, amount: &str) -> CommandResult {
        self.with_ledger_mut(|ledger| {
            ExpenseService::submit(ledger, concept, amount)
                .map(|_| ())
                .map_err(CommandError::from)
        })?;
        cli_io::print_success("Expense added.");
        self.render_after_mutation()
    }

    pub(crate) fn remove_expense(&mut self, raw: &str) -> CommandResult {
        let selector = ExpenseSelector::parse(raw)?;
        let removed = self.with_ledger_mut(|ledger| {
            let Some(id) = ExpenseService::resolve(ledger, &selector)? else {
                return Ok(None);
            };
            Ok(ExpenseService::remove(ledger, id))
        })?;
        match removed {
            Some(expense) => {
                cli_io::print_success(format!("Removed {}.", expense.display_label()));
                self.render_after_mutation()
            }
            None => {
                cli_io::print_warning(format!("No expense matches `{}`; nothing removed.", raw));
                Ok(())
            }
        }
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager
            .save(&self.config)
            .map_err(|err| CommandError::from(BudgetError::from(err)))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("No budget set. Use `budget <amount>` first.")]
    BudgetNotSet,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(BudgetError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<BudgetError> for CommandError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::BudgetNotSet => CommandError::BudgetNotSet,
            BudgetError::Validation(validation) => CommandError::Validation(validation),
            other => CommandError::Core(other),
        }
    }
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(err) => CommandError::from(err),
            ServiceError::Validation(err) => CommandError::Validation(err),
            ServiceError::Invalid(message) => CommandError::InvalidArguments(message),
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Core(inner) => CliError::Core(inner),
            other => CliError::Command(other.to_string()),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(
    base: &std::path::Path,
    lines: &[&str],
) -> Result<ShellContext, CliError> {
    let manager = ConfigManager::with_base_dir(base.to_path_buf())?;
    let mut app = ShellContext::with_config_manager(CliMode::Script, manager)?;
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err)?,
        }
    }
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tracker_domain::BudgetHealth;

    fn run(lines: &[&str]) -> ShellContext {
        let home = tempdir().unwrap();
        process_script(home.path(), lines).expect("script runs")
    }

    fn remaining(context: &ShellContext) -> f64 {
        context
            .with_ledger(|ledger| Ok(ledger.remaining()))
            .expect("budget set")
    }

    #[test]
    fn parse_line_handles_quotes() {
        let tokens = crate::cli::shell::parse_command_line("add \"coffee beans\" 12").unwrap();
        assert_eq!(tokens, vec!["add", "coffee beans", "12"]);
    }

    #[test]
    fn script_runner_sets_budget() {
        let context = run(&["budget 100", "exit"]);
        assert_eq!(remaining(&context), 100.0);
    }

    #[test]
    fn coffee_and_rent_flow_recomputes_remaining() {
        let context = run(&["budget 100", "add coffee 10", "add rent 90", "remove 1"]);
        assert_eq!(remaining(&context), 10.0);
        context
            .with_ledger(|ledger| {
                assert_eq!(ledger.len(), 1);
                assert_eq!(ledger.expenses()[0].concept, "rent");
                assert_eq!(ledger.health(), BudgetHealth::Danger);
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn multi_word_concepts_join_leading_arguments() {
        let context = run(&["budget 50", "add coffee beans 12.5"]);
        context
            .with_ledger(|ledger| {
                assert_eq!(ledger.expenses()[0].concept, "coffee beans");
                assert_eq!(ledger.remaining(), 37.5);
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn invalid_amount_leaves_ledger_unchanged() {
        let context = run(&["budget 100", "add refund -5", "add snack"]);
        assert_eq!(remaining(&context), 100.0);
        context
            .with_ledger(|ledger| {
                assert!(ledger.is_empty());
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn invalid_budget_keeps_session_empty() {
        let context = run(&["budget abc", "budget -1", "add coffee 10"]);
        assert!(!context.session.is_active());
    }

    #[test]
    fn removing_unknown_selector_is_noop() {
        let context = run(&["budget 100", "add coffee 10", "remove 5", "remove abcdef12"]);
        assert_eq!(remaining(&context), 90.0);
    }

    #[test]
    fn reset_clears_session_in_script_mode() {
        let context = run(&["budget 100", "add coffee 10", "reset", "budget 40"]);
        assert_eq!(remaining(&context), 40.0);
    }

    #[test]
    fn config_set_persists_precision() {
        let home = tempdir().unwrap();
        let context = process_script(home.path(), &["config set amount_precision 2"]).unwrap();
        assert_eq!(context.config.amount_precision, Some(2));
        let reloaded = ConfigManager::with_base_dir(home.path().to_path_buf())
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(reloaded.amount_precision, Some(2));
    }

    #[test]
    fn budget_prompt_refuses_active_session() {
        let mut context = run(&["budget 100"]);
        let err = context.prompt_for_budget().unwrap_err();
        assert!(matches!(err, CommandError::Core(BudgetError::BudgetAlreadySet)));
        assert_eq!(remaining(&context), 100.0);
    }

    #[test]
    fn remove_accepts_listed_short_id() {
        let mut context = run(&["budget 100", "add coffee 10", "add rent 50"]);
        let short = context
            .with_ledger(|ledger| Ok(ledger.expenses()[0].short_id()))
            .unwrap();

        context.process_line(&format!("remove {short}")).unwrap();

        assert_eq!(remaining(&context), 50.0);
        context
            .with_ledger(|ledger| {
                assert_eq!(ledger.expenses()[0].concept, "rent");
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn remove_accepts_full_uuid() {
        let mut context = run(&["budget 100", "add coffee 10", "add rent 50"]);
        let id = context
            .with_ledger(|ledger| Ok(ledger.expenses()[1].id))
            .unwrap();

        context.process_line(&format!("remove {id}")).unwrap();

        assert_eq!(remaining(&context), 90.0);
    }

    #[test]
    fn exit_stops_processing() {
        let context = run(&["budget 100", "exit", "add coffee 10"]);
        assert_eq!(remaining(&context), 100.0);
    }

    #[test]
    fn prompt_shows_remaining_balance() {
        let context = run(&["budget 100", "add coffee 10"]);
        assert_eq!(context.prompt(), "budget [90 left]> ");
    }
}
