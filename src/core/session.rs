//! Session-scoped owner of the active ledger.

use tracing::{info, warn};
use tracker_domain::Ledger;

use crate::core::errors::{BudgetError, Result};
use crate::core::validation::parse_budget;

/// Holds the ledger for the lifetime of one budgeting session.
///
/// The session starts empty, gains a ledger once a valid budget is confirmed,
/// and returns to empty on [`BudgetSession::reset`].
#[derive(Debug, Default)]
pub struct BudgetSession {
    current: Option<Ledger>,
}

impl BudgetSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `raw_budget` and opens the ledger. Invalid input leaves the
    /// session empty so the caller can ask again.
    pub fn start(&mut self, raw_budget: &str) -> Result<&Ledger> {
        if self.current.is_some() {
            return Err(BudgetError::BudgetAlreadySet);
        }
        let total = parse_budget(raw_budget).map_err(|err| {
            warn!(input = raw_budget, error = %err, "budget rejected");
            BudgetError::from(err)
        })?;
        info!(total, "budget session started");
        Ok(self.current.insert(Ledger::new(total)))
    }

    pub fn reset(&mut self) {
        if self.current.take().is_some() {
            info!("budget session reset");
        }
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Ledger> {
        self.current.as_ref()
    }

    pub fn with_current<T>(&self, f: impl FnOnce(&Ledger) -> T) -> Result<T> {
        self.current.as_ref().map(f).ok_or(BudgetError::BudgetNotSet)
    }

    pub fn with_current_mut<T>(&mut self, f: impl FnOnce(&mut Ledger) -> T) -> Result<T> {
        self.current.as_mut().map(f).ok_or(BudgetError::BudgetNotSet)
    }
}
