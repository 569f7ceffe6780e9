use colored::{Color, Colorize};
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::config::Theme;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
    Income,
    Expense,
}

static THEME: OnceLock<RwLock<Theme>> = OnceLock::new();

pub fn set_theme(theme: Theme) {
    let lock = THEME.get_or_init(|| RwLock::new(Theme::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = theme;
    }
}

fn theme() -> Theme {
    THEME
        .get_or_init(|| RwLock::new(Theme::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn palette(kind: MessageKind, theme: Theme) -> Option<Color> {
    match (theme, kind) {
        (Theme::Plain, _) | (_, MessageKind::Info) | (_, MessageKind::Section) => None,
        (Theme::Light, MessageKind::Success | MessageKind::Income) => Some(Color::Green),
        (Theme::Light, MessageKind::Warning) => Some(Color::Yellow),
        (Theme::Light, MessageKind::Error | MessageKind::Expense) => Some(Color::Red),
        (Theme::Dark, MessageKind::Success | MessageKind::Income) => Some(Color::BrightGreen),
        (Theme::Dark, MessageKind::Warning) => Some(Color::BrightYellow),
        (Theme::Dark, MessageKind::Error | MessageKind::Expense) => Some(Color::BrightRed),
    }
}

fn label(kind: MessageKind) -> Option<&'static str> {
    match kind {
        MessageKind::Info => Some("INFO"),
        MessageKind::Success => Some("OK"),
        MessageKind::Warning => Some("WARNING"),
        MessageKind::Error => Some("ERROR"),
        MessageKind::Section | MessageKind::Income | MessageKind::Expense => None,
    }
}

/// Applies the active theme to `message` without printing it.
pub fn styled(kind: MessageKind, message: impl fmt::Display) -> String {
    let current = theme();
    let text = match (kind, label(kind)) {
        (MessageKind::Section, _) => format!("=== {} ===", message.to_string().trim()),
        (_, Some(label)) => format!("{label}: {message}"),
        (_, None) => message.to_string(),
    };

    let text = match palette(kind, current) {
        Some(color) => text.color(color).to_string(),
        None => text,
    };
    if kind == MessageKind::Section && current != Theme::Plain {
        text.bold().to_string()
    } else {
        text
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = styled(kind, message);
    match kind {
        MessageKind::Section => println!("\n{formatted}"),
        _ => println!("{formatted}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Prints a line verbatim.
pub fn line(message: impl fmt::Display) {
    println!("{message}");
}
