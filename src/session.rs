//! Input staging for the entry form: active tab, form visibility, keypad text
//! and the picked category. Nothing here reaches the ledger until `commit`.

use serde::{Deserialize, Serialize};

use crate::errors::{AppendError, InputError};
use crate::ledger::{category, Entry, EntryKind, Ledger};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputSession {
    pub active_kind: EntryKind,
    pub modal_open: bool,
    pub income_text: String,
    pub expense_text: String,
    pub selected_category: String,
    /// Free-form note typed into the form. Cleared on commit, never stored.
    #[serde(default)]
    pub description: String,
}

impl Default for InputSession {
    fn default() -> Self {
        Self {
            active_kind: EntryKind::Expense,
            modal_open: false,
            income_text: String::new(),
            expense_text: String::new(),
            selected_category: category::default_definition().value.clone(),
            description: String::new(),
        }
    }
}

impl InputSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_entry_form(&mut self) {
        self.modal_open = true;
    }

    /// Hides the form. Staged text survives so reopening resumes it.
    pub fn close_entry_form(&mut self) {
        self.modal_open = false;
    }

    pub fn select_kind(&mut self, kind: EntryKind) {
        self.active_kind = kind;
    }

    pub fn press_digit(&mut self, digit: u8) -> Result<(), InputError> {
        if digit > 9 {
            return Err(InputError::InvalidDigit(digit));
        }
        self.active_text_mut().push(char::from(b'0' + digit));
        Ok(())
    }

    /// Adds a decimal point unless the active text already has one.
    pub fn press_decimal(&mut self) -> bool {
        let text = self.active_text_mut();
        if text.contains('.') {
            return false;
        }
        text.push('.');
        true
    }

    /// Stores the picked value as-is; the ledger resolves it on commit.
    pub fn select_category(&mut self, value: impl Into<String>) {
        self.selected_category = value.into();
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    /// Text typed so far for the active kind.
    pub fn staged_amount(&self) -> &str {
        match self.active_kind {
            EntryKind::Income => &self.income_text,
            EntryKind::Expense => &self.expense_text,
        }
    }

    /// Hands the staged input to the ledger.
    ///
    /// On success both staged texts and the description are cleared and the
    /// form closes; the active kind and category stay selected. On failure
    /// nothing changes.
    pub fn commit(&mut self, ledger: &mut Ledger) -> Result<Entry, AppendError> {
        let entry = ledger.append(
            self.active_kind,
            self.staged_amount(),
            &self.selected_category,
        )?;
        self.income_text.clear();
        self.expense_text.clear();
        self.description.clear();
        self.modal_open = false;
        Ok(entry)
    }

    fn active_text_mut(&mut self) -> &mut String {
        match self.active_kind {
            EntryKind::Income => &mut self.income_text,
            EntryKind::Expense => &mut self.expense_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_closed_expense_form_with_first_category() {
        let session = InputSession::new();
        assert_eq!(session.active_kind, EntryKind::Expense);
        assert!(!session.modal_open);
        assert_eq!(session.selected_category, "salary");
        assert_eq!(session.staged_amount(), "");
    }

    #[test]
    fn digits_go_to_the_active_kind_only() {
        let mut session = InputSession::new();
        session.press_digit(4).unwrap();
        session.select_kind(EntryKind::Income);
        session.press_digit(7).unwrap();
        assert_eq!(session.expense_text, "4");
        assert_eq!(session.income_text, "7");
        assert_eq!(session.staged_amount(), "7");
    }

    #[test]
    fn second_decimal_point_is_ignored() {
        let mut session = InputSession::new();
        session.press_digit(1).unwrap();
        assert!(session.press_decimal());
        session.press_digit(5).unwrap();
        assert!(!session.press_decimal());
        assert_eq!(session.staged_amount(), "1.5");
    }

    #[test]
    fn out_of_range_digit_is_rejected() {
        let mut session = InputSession::new();
        assert_eq!(session.press_digit(10), Err(InputError::InvalidDigit(10)));
        assert_eq!(session.staged_amount(), "");
    }

    #[test]
    fn closing_keeps_staged_text() {
        let mut session = InputSession::new();
        session.open_entry_form();
        session.press_digit(3).unwrap();
        session.close_entry_form();
        assert!(!session.modal_open);
        assert_eq!(session.staged_amount(), "3");
    }

    #[test]
    fn description_is_discarded_on_commit() {
        let mut ledger = Ledger::new();
        let mut session = InputSession::new();
        session.open_entry_form();
        session.press_digit(9).unwrap();
        session.set_description("lunch with team");
        session.commit(&mut ledger).unwrap();
        assert_eq!(session.description, "");
        let json = serde_json::to_string(&ledger.list()[0]).unwrap();
        assert!(!json.contains("lunch"));
    }

    #[test]
    fn description_survives_a_failed_commit() {
        let mut ledger = Ledger::new();
        let mut session = InputSession::new();
        session.set_description("rent");
        assert!(session.commit(&mut ledger).is_err());
        assert_eq!(session.description, "rent");
    }

    #[test]
    fn older_snapshots_without_description_still_load() {
        let json = r#"{"active_kind":"income","modal_open":true,"income_text":"5","expense_text":"","selected_category":"food"}"#;
        let session: InputSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.description, "");
        assert_eq!(session.staged_amount(), "5");
    }

    #[test]
    fn session_round_trips_through_json() {
        let mut session = InputSession::new();
        session.select_kind(EntryKind::Income);
        session.press_digit(2).unwrap();
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"active_kind\":\"income\""));
        let restored: InputSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
