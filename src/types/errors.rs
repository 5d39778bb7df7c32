use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("'{0}' is not a plain decimal number")]
    Format(String),
    #[error(transparent)]
    Decimal(#[from] rust_decimal::Error)
}
