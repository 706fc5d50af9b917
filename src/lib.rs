#![doc(test(attr(deny(warnings))))]

//! Budget Tracker keeps a single session budget, records itemized expenses
//! against it, and renders the remaining balance with a threshold indicator.

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

pub use tracker_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Budget Tracker tracing initialized.");
    });
}
