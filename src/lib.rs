#![doc(test(attr(deny(warnings))))]

//! Pocket Ledger records income and expense entries for a single session and
//! derives the running balance from them.
//!
//! ```
//! use pocket_ledger::ledger::{EntryKind, Ledger};
//!
//! let mut ledger = Ledger::new();
//! ledger.append(EntryKind::Income, "100", "salary").unwrap();
//! ledger.append(EntryKind::Expense, "40", "food").unwrap();
//! assert_eq!(ledger.balance().to_string(), "60.00");
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod session;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pocket Ledger tracing initialized.");
    });
}
