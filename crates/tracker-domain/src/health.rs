//! Indicator state derived from how much of the budget is left.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fraction of the total below which the balance is considered critical.
pub const DANGER_THRESHOLD: f64 = 0.25;
/// Fraction of the total below which the balance deserves attention.
pub const WARNING_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetHealth {
    Success,
    Warning,
    Danger,
}

impl BudgetHealth {
    /// Classifies a remaining balance against the total budget.
    ///
    /// Both comparisons are strict: exactly half of the budget left is still
    /// `Success`, exactly a quarter left is `Warning`.
    pub fn classify(total_budget: f64, remaining: f64) -> Self {
        if remaining < total_budget * DANGER_THRESHOLD {
            BudgetHealth::Danger
        } else if remaining < total_budget * WARNING_THRESHOLD {
            BudgetHealth::Warning
        } else {
            BudgetHealth::Success
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetHealth::Success => "success",
            BudgetHealth::Warning => "warning",
            BudgetHealth::Danger => "danger",
        }
    }
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
