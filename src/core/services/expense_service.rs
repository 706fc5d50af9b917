//! Business logic helpers for expense management.

use tracing::{debug, info, warn};
use tracker_domain::{Expense, Ledger};
use uuid::Uuid;

use crate::core::errors::ValidationError;
use crate::core::services::{ServiceError, ServiceResult};
use crate::core::validation::{validate_expense, ExpenseDraft};

/// Validated operations for [`Expense`] entries of a [`Ledger`].
pub struct ExpenseService;

/// How a user refers to an expense on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseSelector {
    /// 1-based position in the rendered list.
    Row(usize),
    Id(Uuid),
    /// Leading hex digits of the id, as shown in list views.
    IdPrefix(String),
}

impl ExpenseSelector {
    pub fn parse(raw: &str) -> ServiceResult<Self> {
        let trimmed = raw.trim().trim_start_matches('#');
        if trimmed.is_empty() {
            return Err(ServiceError::Invalid("expense selector is empty".into()));
        }
        if let Ok(row) = trimmed.parse::<usize>() {
            if trimmed.len() < 8 {
                return Ok(ExpenseSelector::Row(row));
            }
        }
        if let Ok(id) = Uuid::parse_str(trimmed) {
            return Ok(ExpenseSelector::Id(id));
        }
        if trimmed.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Ok(ExpenseSelector::IdPrefix(trimmed.to_ascii_lowercase()));
        }
        Err(ServiceError::Invalid(format!(
            "`{}` is neither a row number nor an expense id",
            raw
        )))
    }
}

impl ExpenseService {
    /// Validates raw form input and records it. The ledger is only touched
    /// when both fields are valid.
    pub fn submit(ledger: &mut Ledger, concept: &str, amount: &str) -> ServiceResult<Expense> {
        let draft = validate_expense(concept, amount).map_err(|err| {
            warn!(concept, amount, error = %err, "expense rejected");
            ServiceError::from(err)
        })?;
        if !(ledger.spent() + draft.amount).is_finite() {
            warn!(concept, amount, "expense rejected; total spent would overflow");
            return Err(ValidationError::AmountTooLarge.into());
        }
        Ok(Self::add(ledger, draft))
    }

    pub fn add(ledger: &mut Ledger, draft: ExpenseDraft) -> Expense {
        let expense = Expense::new(draft.concept, draft.amount);
        ledger.add_expense(expense.clone());
        info!(
            id = %expense.id,
            concept = %expense.concept,
            amount = expense.amount,
            remaining = ledger.remaining(),
            "expense added"
        );
        expense
    }

    /// Removes the expense with `id`. Unknown ids are a silent no-op.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> Option<Expense> {
        let removed = ledger.remove_expense(id);
        match &removed {
            Some(expense) => info!(
                id = %expense.id,
                remaining = ledger.remaining(),
                "expense removed"
            ),
            None => debug!(%id, "remove ignored; id not present"),
        }
        removed
    }

    /// Maps a selector to the id of an expense currently in the ledger.
    pub fn resolve(ledger: &Ledger, selector: &ExpenseSelector) -> ServiceResult<Option<Uuid>> {
        let expenses = ledger.expenses();
        let found = match selector {
            ExpenseSelector::Row(row) => row
                .checked_sub(1)
                .and_then(|idx| expenses.get(idx))
                .map(|expense| expense.id),
            ExpenseSelector::Id(id) => ledger.expense(*id).map(|expense| expense.id),
            ExpenseSelector::IdPrefix(prefix) => {
                let mut matches = expenses
                    .iter()
                    .filter(|expense| expense.id.simple().to_string().starts_with(prefix.as_str()));
                let first = matches.next().map(|expense| expense.id);
                if first.is_some() && matches.next().is_some() {
                    return Err(ServiceError::Invalid(format!(
                        "id prefix `{}` matches more than one expense",
                        prefix
                    )));
                }
                first
            }
        };
        Ok(found)
    }
}
