use std::{fmt, str::FromStr};

use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::CategoryDefinition;
use crate::errors::UnknownEntryKind;

const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";
const DISPLAY_TIME_FORMAT: &str = "%H:%M:%S";

/// Income/expense classification of an entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    #[default]
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = UnknownEntryKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            _ => Err(UnknownEntryKind(s.to_string())),
        }
    }
}

/// One recorded income or expense transaction. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    id: Uuid,
    kind: EntryKind,
    amount: Decimal,
    category: CategoryDefinition,
    created_at: DateTime<Utc>,
}

impl Entry {
    pub(crate) fn new(
        kind: EntryKind,
        amount: Decimal,
        category: CategoryDefinition,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            category,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Amount with exactly two fractional digits.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> &CategoryDefinition {
        &self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Creation date in the local timezone, e.g. `Oct 14, 2026`.
    pub fn display_date(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format(DISPLAY_DATE_FORMAT)
            .to_string()
    }

    /// Creation time in the local timezone.
    pub fn display_time(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format(DISPLAY_TIME_FORMAT)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Income".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert_eq!(" expense ".parse::<EntryKind>().unwrap(), EntryKind::Expense);
        let err = "transfer".parse::<EntryKind>().unwrap_err();
        assert_eq!(err, UnknownEntryKind("transfer".into()));
        assert_eq!(
            err.to_string(),
            "unknown entry kind `transfer` (expected income or expense)"
        );
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&EntryKind::Income).unwrap();
        assert_eq!(json, "\"income\"");
    }

    #[test]
    fn display_helpers_render_local_date_and_time() {
        use crate::time::{Clock, FixedClock};
        use chrono::{NaiveDate, NaiveTime, TimeZone};

        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 14, 16, 5, 9).unwrap());
        let entry = Entry::new(
            EntryKind::Income,
            Decimal::new(1000, 2),
            crate::ledger::category::default_definition().clone(),
            clock.now(),
        );
        let local = clock.now().with_timezone(&Local);

        let date = entry.display_date();
        let parsed = NaiveDate::parse_from_str(&date, "%b %d, %Y").unwrap();
        assert_eq!(parsed, local.date_naive());
        assert_eq!(date.len(), "Oct 14, 2026".len());

        let time = NaiveTime::parse_from_str(&entry.display_time(), "%H:%M:%S").unwrap();
        assert_eq!(time, local.time());
    }

    #[test]
    fn default_kind_is_expense() {
        assert_eq!(EntryKind::default(), EntryKind::Expense);
    }
}
