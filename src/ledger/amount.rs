//! Parsing of keypad-assembled amount text.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::AppendError;

/// Number of fractional digits every committed amount carries.
pub const AMOUNT_SCALE: u32 = 2;

/// Parses `raw` into a non-negative amount with exactly two fractional digits.
///
/// Accepts ASCII digits with at most one decimal point, with or without digits
/// on either side of it (`"12."`, `".5"`). Midpoints round away from zero, so
/// `"12.345"` becomes `12.35`. Values too large to carry two fractional digits
/// are rejected.
pub fn parse_amount(raw: &str) -> Result<Decimal, AppendError> {
    let trimmed = raw.trim();
    let invalid = || AppendError::EmptyOrInvalidAmount {
        input: raw.to_string(),
    };

    let mut points = 0usize;
    let mut digits = 0usize;
    for ch in trimmed.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return Err(invalid()),
        }
    }
    if digits == 0 || points > 1 {
        return Err(invalid());
    }

    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let whole = if whole.is_empty() { "0" } else { whole };
    let normalized = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    };

    let parsed = Decimal::from_str(&normalized).map_err(|_| invalid())?;
    let amount = to_amount_scale(parsed);
    if amount.scale() != AMOUNT_SCALE {
        return Err(invalid());
    }
    Ok(amount)
}

/// Rounds half away from zero to two places and pads the scale to two.
pub fn to_amount_scale(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(AMOUNT_SCALE);
    rounded
}
