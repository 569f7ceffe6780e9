use thiserror::Error;

/// Rejection raised when an entry cannot be appended to the ledger.
///
/// Recoverable: the ledger is left untouched and the caller may retry with
/// corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppendError {
    #[error("amount `{input}` is empty or not a valid non-negative number")]
    EmptyOrInvalidAmount { input: String },
}

/// Text that names neither `income` nor `expense`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown entry kind `{0}` (expected income or expense)")]
pub struct UnknownEntryKind(pub String);

/// Keypad input that the staging session refuses to record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("keypad digit must be between 0 and 9, got {0}")]
    InvalidDigit(u8),
}

/// Failures while loading or saving presentation preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration value: {0}")]
    Invalid(String),
}
