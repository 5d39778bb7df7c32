use super::{AmountError, Direction};
use anyhow::Result;

#[test]
fn test_direction_serializes_with_ledger_spelling() -> Result<()> {
    assert_eq!(serde_json::to_string(&Direction::Credit)?, "\"Credit\"");
    assert_eq!(serde_json::to_string(&Direction::Debit)?, "\"Debit\"");

    Ok(())
}

#[test]
fn test_direction_rejects_unknown_or_lowercase_values() {
    assert!(serde_json::from_str::<Direction>("\"credit\"").is_err());
    assert!(serde_json::from_str::<Direction>("\"Sideways\"").is_err());
}

#[test]
fn test_direction_names_cover_every_variant() -> Result<()> {
    for name in Direction::NAMES {
        let direction: Direction = serde_json::from_str(&format!("\"{name}\""))?;
        assert_eq!(serde_json::to_string(&direction)?, format!("\"{name}\""));
    }

    Ok(())
}

#[test]
fn test_parse_amount_accepts_plain_decimals() -> Result<()> {
    assert_eq!(super::parse_amount("0.01")?.to_string(), "0.01");
    assert_eq!(super::parse_amount(" 1000000000 ")?.to_string(), "1000000000");

    Ok(())
}

#[test]
fn test_parse_amount_rejects_non_numeric_text() {
    assert!(super::parse_amount("ten").is_err());
    assert!(super::parse_amount("").is_err());
    assert!(super::parse_amount("1.2.3").is_err());
}

#[test]
fn test_parse_amount_rejects_separators_and_exponents() {
    for text in ["1_000", "1_0_0", "1,000", "1e3", "--1", ".", "+"] {
        assert_eq!(super::parse_amount(text), Err(AmountError::Format(text.to_string())), "{text}");
    }
}

#[test]
fn test_parse_amount_accepts_signs_and_bare_fractions() -> Result<()> {
    assert_eq!(super::parse_amount("-5")?.to_string(), "-5");
    assert_eq!(super::parse_amount("+12.50")?.to_string(), "12.50");
    assert_eq!(super::parse_amount(".5")?.to_string(), "0.5");

    Ok(())
}
