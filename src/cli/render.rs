//! Text rendering of the ledger for the shell.

use rust_decimal::Decimal;

use super::output::{styled, MessageKind};
use crate::ledger::{CategoryDefinition, Entry, EntryKind, Ledger};
use crate::session::InputSession;

/// Formats `amount` as `{symbol}{amount}` with two decimals; negatives lead with `-`.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let magnitude = amount.abs().round_dp(2);
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-{symbol}{magnitude:.2}")
    } else {
        format!("{symbol}{magnitude:.2}")
    }
}

pub fn summary_lines(ledger: &Ledger, symbol: &str) -> Vec<String> {
    let summary = ledger.summary();
    vec![
        format!("Balance        {}", format_money(summary.balance, symbol)),
        styled(
            MessageKind::Income,
            format!("Total Income   {}", format_money(summary.total_income, symbol)),
        ),
        styled(
            MessageKind::Expense,
            format!("Total Expense  {}", format_money(summary.total_expense, symbol)),
        ),
    ]
}

pub fn entry_row(entry: &Entry, symbol: &str) -> String {
    let kind = match entry.kind() {
        EntryKind::Income => MessageKind::Income,
        EntryKind::Expense => MessageKind::Expense,
    };
    let amount = styled(kind, format!("{:>12}", format_money(entry.amount(), symbol)));
    format!(
        "{} {} {:<14} {} {}",
        entry.category().icon,
        amount,
        entry.category().label,
        entry.display_date(),
        entry.display_time()
    )
}

/// Rows for "Recent Transactions", newest first.
pub fn recent_rows(ledger: &Ledger, symbol: &str) -> Vec<String> {
    ledger.recent().map(|entry| entry_row(entry, symbol)).collect()
}

pub fn category_row(definition: &CategoryDefinition, selected: bool) -> String {
    let marker = if selected { '*' } else { ' ' };
    format!(
        "{marker} {} {:<14} {:<14} {}",
        definition.icon, definition.value, definition.label, definition.color
    )
}

/// One-line view of the entry form.
pub fn form_line(session: &InputSession) -> String {
    let state = if session.modal_open { "open" } else { "closed" };
    let staged = if session.staged_amount().is_empty() {
        "-"
    } else {
        session.staged_amount()
    };
    format!(
        "Form {state}: {} {staged} [{}]",
        session.active_kind, session.selected_category
    )
}
