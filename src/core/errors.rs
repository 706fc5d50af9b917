use std::result::Result as StdResult;

use thiserror::Error;
use tracker_config::ConfigError as CliConfigError;

/// Input rejected before it reaches the ledger. The display text is the
/// message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your budget.")]
    EmptyBudget,
    #[error("`{0}` is not a valid budget.")]
    BudgetNotNumeric(String),
    #[error("The budget must be greater than zero.")]
    BudgetNotPositive,
    #[error("Please enter the expense name.")]
    MissingConcept,
    #[error("Please enter the amount.")]
    MissingAmount,
    #[error("Please enter a valid amount.")]
    InvalidAmount,
    #[error("That amount is too large to track.")]
    AmountTooLarge,
}

/// Unified error type for core/domain/config layers.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("No budget set")]
    BudgetNotSet,
    #[error("A budget is already set for this session")]
    BudgetAlreadySet,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}

impl From<CliConfigError> for BudgetError {
    fn from(err: CliConfigError) -> Self {
        match err {
            CliConfigError::Io(io) => BudgetError::StorageError(io.to_string()),
            other => BudgetError::ConfigError(other.to_string()),
        }
    }
}

impl From<CliConfigError> for CliError {
    fn from(err: CliConfigError) -> Self {
        CliError::from(BudgetError::from(err))
    }
}
