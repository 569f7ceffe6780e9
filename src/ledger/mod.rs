//! In-memory ledger, its entries, and the static category table.

pub mod amount;
pub mod category;
pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use amount::parse_amount;
pub use category::CategoryDefinition;
pub use entry::{Entry, EntryKind};
pub use ledger::{Ledger, LedgerSummary};
