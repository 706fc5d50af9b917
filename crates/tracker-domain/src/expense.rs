//! Domain model for a single recorded expense.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Amounted, Displayable};

/// A cost item recorded against the budget.
///
/// Expenses are never edited after creation; the ledger hands out shared
/// references only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub concept: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(concept: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            concept: concept.into(),
            amount,
            created_at: Utc::now(),
        }
    }

    /// First eight hex digits of the id, as shown in list views.
    pub fn short_id(&self) -> String {
        let mut short = self.id.simple().to_string();
        short.truncate(8);
        short
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({})", self.concept, self.amount)
    }
}
