use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::{
    amount::{parse_amount, to_amount_scale, AMOUNT_SCALE},
    category,
    entry::{Entry, EntryKind},
};
use crate::errors::AppendError;
use crate::time::{Clock, SystemClock};

/// Append-only, in-memory sequence of entries for one session.
pub struct Ledger {
    entries: Vec<Entry>,
    clock: Box<dyn Clock>,
}

/// Snapshot of the derived totals.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LedgerSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    /// Parses `raw_amount`, resolves `category_value` and records a new entry.
    ///
    /// Unknown category values resolve to the first static definition rather
    /// than failing. An amount that would push the kind's total out of the
    /// two-decimal range is rejected. On error the ledger is left unchanged.
    pub fn append(
        &mut self,
        kind: EntryKind,
        raw_amount: &str,
        category_value: &str,
    ) -> Result<Entry, AppendError> {
        let amount = match parse_amount(raw_amount) {
            Ok(amount) => amount,
            Err(err) => {
                tracing::debug!(%kind, raw_amount, "append rejected");
                return Err(err);
            }
        };
        let fits_total = self
            .total_for(kind)
            .checked_add(amount)
            .map(to_amount_scale)
            .is_some_and(|total| total.scale() == AMOUNT_SCALE);
        if !fits_total {
            tracing::debug!(%kind, raw_amount, "append rejected, total out of range");
            return Err(AppendError::EmptyOrInvalidAmount {
                input: raw_amount.to_string(),
            });
        }
        let category = category::resolve(category_value).clone();
        let entry = Entry::new(kind, amount, category, self.clock.now());
        tracing::debug!(
            id = %entry.id(),
            %kind,
            amount = %entry.amount(),
            category = %entry.category().value,
            "entry appended"
        );
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Sum of the amounts of every entry of `kind`; zero when there are none.
    pub fn total_for(&self, kind: EntryKind) -> Decimal {
        let total = self
            .entries
            .iter()
            .filter(|entry| entry.kind() == kind)
            .fold(Decimal::ZERO, |acc, entry| acc + entry.amount());
        to_amount_scale(total)
    }

    /// Income minus expense. May be negative.
    pub fn balance(&self) -> Decimal {
        self.total_for(EntryKind::Income) - self.total_for(EntryKind::Expense)
    }

    pub fn summary(&self) -> LedgerSummary {
        let total_income = self.total_for(EntryKind::Income);
        let total_expense = self.total_for(EntryKind::Expense);
        LedgerSummary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// Entries in creation order, oldest first.
    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries newest first.
    pub fn recent(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
