//! tracker-domain
//!
//! Pure budget models (Ledger, Expense, BudgetHealth).
//! No I/O, no CLI, no rendering. Only data types and the ledger arithmetic.

pub mod common;
pub mod expense;
pub mod health;
pub mod ledger;

pub use common::*;
pub use expense::*;
pub use health::*;
pub use ledger::*;
