use pocket_ledger::errors::AppendError;
use pocket_ledger::ledger::{EntryKind, Ledger};
use pocket_ledger::session::InputSession;
use rust_decimal_macros::dec;

fn type_amount(session: &mut InputSession, keys: &str) {
    for ch in keys.chars() {
        if ch == '.' {
            session.press_decimal();
        } else {
            session.press_digit(ch as u8 - b'0').unwrap();
        }
    }
}

#[test]
fn commit_appends_and_resets_the_form() {
    let mut ledger = Ledger::new();
    let mut session = InputSession::new();
    session.select_kind(EntryKind::Income);
    session.open_entry_form();
    type_amount(&mut session, "2500.5");
    session.select_category("salary");

    let entry = session.commit(&mut ledger).unwrap();
    assert_eq!(entry.amount(), dec!(2500.50));
    assert_eq!(entry.kind(), EntryKind::Income);
    assert!(!session.modal_open);
    assert_eq!(session.income_text, "");
    assert_eq!(session.expense_text, "");
    assert_eq!(session.active_kind, EntryKind::Income);
    assert_eq!(session.selected_category, "salary");
}

#[test]
fn failed_commit_leaves_everything_unchanged() {
    let mut ledger = Ledger::new();
    let mut session = InputSession::new();
    session.open_entry_form();
    session.press_decimal();
    let before = session.clone();

    let err = session.commit(&mut ledger).unwrap_err();
    assert_eq!(
        err,
        AppendError::EmptyOrInvalidAmount {
            input: ".".to_string()
        }
    );
    assert_eq!(session, before);
    assert!(ledger.is_empty());
}

#[test]
fn commit_uses_only_the_active_kinds_text() {
    let mut ledger = Ledger::new();
    let mut session = InputSession::new();
    session.open_entry_form();
    type_amount(&mut session, "40");
    session.select_category("food");
    session.select_kind(EntryKind::Income);
    type_amount(&mut session, "100");
    session.select_kind(EntryKind::Expense);

    let entry = session.commit(&mut ledger).unwrap();
    assert_eq!(entry.kind(), EntryKind::Expense);
    assert_eq!(entry.amount(), dec!(40.00));
    // both staged fields are cleared together
    assert_eq!(session.income_text, "");
}

#[test]
fn unknown_selected_category_commits_with_fallback() {
    let mut ledger = Ledger::new();
    let mut session = InputSession::new();
    session.open_entry_form();
    type_amount(&mut session, "3");
    session.select_category("coffee");
    let entry = session.commit(&mut ledger).unwrap();
    assert_eq!(entry.category().value, "salary");
}
