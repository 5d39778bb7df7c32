mod validator;

use std::fmt::{self, Display, Formatter};

use crate::schema::Rule;

pub use validator::Validator;

/// One failed constraint, phrased so the offending cell can be found and fixed.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// A field broke one of its schema rules.
    Rule {
        field: String,
        rule: Rule
    },
    /// A field bound to a numeric range did not hold a number at all.
    NotDecimal {
        field: String
    },
    /// The row could not be split into fields.
    Malformed(String)
}

impl Display for Violation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Rule { field, rule } => write!(formatter, "{field} {rule}"),
            Violation::NotDecimal { field } => write!(formatter, "{field} must be a decimal number"),
            Violation::Malformed(message) => write!(formatter, "{message}")
        }
    }
}

/// Every violation found in a single row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validation {
    violations: Vec<Violation>
}

impl Validation {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            violations: vec![Violation::Malformed(message.into())]
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    #[cfg(test)]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}
