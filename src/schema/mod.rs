//! Declarative constraints for one input row.
//!
//! The table maps a column name to the rules its value must satisfy. It holds no
//! behaviour; [`crate::validation::Validator`] is the single engine that applies it.


use std::fmt::{self, Display, Formatter};

use rust_decimal::Decimal;

use crate::types::Direction;

/// Smallest accepted transfer amount, 0.01.
pub const MIN_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
/// Largest accepted transfer amount, 1000000000.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Legs 0 and 1 are mandatory on every transaction.
pub const REQUIRED_LEGS: usize = 2;
/// Legs 2 and 3 may be supplied in addition.
pub const TOTAL_LEGS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// The value must be present and not blank.
    Required,
    /// The value must not exceed this many characters.
    MaxLength(usize),
    /// The value must parse as a decimal within the inclusive bounds.
    Range {
        min: Decimal,
        max: Decimal
    },
    /// The value must be one of these spellings.
    OneOf(&'static [&'static str])
}

impl Display for Rule {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(formatter, "is required"),
            Rule::MaxLength(max) => write!(formatter, "must be at most {max} characters"),
            Rule::Range { min, max } => write!(formatter, "must be between {min} and {max}"),
            Rule::OneOf(allowed) => write!(formatter, "must be one of: {}", allowed.join(", "))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub rules: Vec<Rule>
}

impl FieldSchema {
    fn new(name: impl Into<String>, rules: &[Rule]) -> Self {
        Self {
            name: name.into(),
            rules: rules.to_vec()
        }
    }

    #[cfg(test)]
    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }
}

/// The ordered rule table for a row.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    fields: Vec<FieldSchema>
}

impl RecordSchema {
    /// The rules of a ledger transaction row.
    pub fn transaction() -> Self {
        let mut fields = vec![
            FieldSchema::new("MerchantTrackingNumber", &[Rule::MaxLength(128)]),
            FieldSchema::new("MerchantTrackingUrl", &[]),
            FieldSchema::new("ProcessorTrackingNumber", &[Rule::MaxLength(128)]),
            FieldSchema::new("KfsTrackingNumber", &[Rule::MaxLength(10)]),
            FieldSchema::new("Source", &[Rule::Required]),
            FieldSchema::new("SourceType", &[Rule::Required]),
            FieldSchema::new("TxnDescription", &[])
        ];

        for leg in 0..TOTAL_LEGS {
            fields.extend(transfer_leg(leg, leg < REQUIRED_LEGS));
        }

        fields.push(FieldSchema::new("MetaDataName", &[Rule::MaxLength(128)]));
        fields.push(FieldSchema::new("MetaDataValue", &[]));

        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    #[cfg(test)]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Every leg shares one rule shape; only the presence requirement differs.
fn transfer_leg(index: usize, required: bool) -> [FieldSchema; 4] {
    let leg_field = |prefix: &str, rule: Option<Rule>| FieldSchema {
        name: format!("{prefix}{index}"),
        rules: required.then_some(Rule::Required).into_iter().chain(rule).collect()
    };

    [
        leg_field("Amount", Some(Rule::Range { min: MIN_AMOUNT, max: MAX_AMOUNT })),
        leg_field("CoA", None),
        leg_field("Description", Some(Rule::MaxLength(40))),
        leg_field("Direction", Some(Rule::OneOf(Direction::NAMES)))
    ]
}
