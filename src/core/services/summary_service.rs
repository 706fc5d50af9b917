//! Read-only summaries handed to the presentation layer.

use serde::Serialize;
use tracker_domain::{BudgetHealth, Ledger};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetSummary {
    pub total_budget: f64,
    pub spent: f64,
    pub remaining: f64,
    pub health: BudgetHealth,
    pub expense_count: usize,
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(ledger: &Ledger) -> BudgetSummary {
        BudgetSummary {
            total_budget: ledger.total_budget(),
            spent: ledger.spent(),
            remaining: ledger.remaining(),
            health: ledger.health(),
            expense_count: ledger.len(),
        }
    }
}
