mod direction;
mod errors;
#[cfg(test)]
mod tests;

use std::str::FromStr;

use rust_decimal::Decimal;

pub use direction::Direction;
pub use errors::AmountError;

/// 0-based position of a data row in the input file (the header row is not counted).
pub type RowIndex = usize;

/// Identifier assigned by the ledger service to a created transaction.
pub type TransactionId = String;

/// Parses a transfer amount the same way for validation and for record binding.
///
/// Only an optional sign, digits and an optional fractional part are accepted.
/// Digit separators and exponents are rejected even though `Decimal` itself would
/// take some of them.
pub fn parse_amount(value: &str) -> Result<Decimal, AmountError> {
    let value = value.trim();

    if !is_plain_decimal(value) {
        return Err(AmountError::Format(value.to_string()));
    }

    Ok(Decimal::from_str(value)?)
}

fn is_plain_decimal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['-', '+']).unwrap_or(value);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());

    !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
}
