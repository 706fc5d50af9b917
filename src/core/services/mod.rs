pub mod expense_service;
pub mod summary_service;

pub use expense_service::{ExpenseSelector, ExpenseService};
pub use summary_service::{BudgetSummary, SummaryService};

use crate::core::errors::{BudgetError, ValidationError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Invalid(String),
}
