//! The budget ledger: total budget, expenses, and the derived balance.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{common::total_amount, expense::Expense, health::BudgetHealth};

/// Session-scoped budget state.
///
/// `remaining` always equals `total_budget` minus the sum of every expense
/// amount. It is recomputed from the full expense list after each mutation
/// rather than adjusted in place.
#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    total_budget: f64,
    remaining: f64,
    expenses: Vec<Expense>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Ledger {
    /// Creates an empty ledger. Callers validate that `total_budget` is a
    /// positive finite number before calling.
    pub fn new(total_budget: f64) -> Self {
        debug_assert!(total_budget.is_finite() && total_budget > 0.0);
        let now = Utc::now();
        Self {
            total_budget,
            remaining: total_budget,
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn total_budget(&self) -> f64 {
        self.total_budget
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn spent(&self) -> f64 {
        total_amount(&self.expenses)
    }

    /// Expenses in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn health(&self) -> BudgetHealth {
        BudgetHealth::classify(self.total_budget, self.remaining)
    }

    /// Appends an expense and recomputes the balance. The balance may go
    /// negative.
    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.recalculate_remaining();
        self.touch();
        id
    }

    /// Removes the expense with `id`, returning it. Unknown ids leave the
    /// ledger untouched.
    pub fn remove_expense(&mut self, id: Uuid) -> Option<Expense> {
        let position = self.expenses.iter().position(|expense| expense.id == id)?;
        let removed = self.expenses.remove(position);
        self.recalculate_remaining();
        self.touch();
        Some(removed)
    }

    pub fn recalculate_remaining(&mut self) -> f64 {
        self.remaining = self.total_budget - self.spent();
        self.remaining
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
