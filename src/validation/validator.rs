use crate::schema::{FieldSchema, RecordSchema, Rule};
use crate::source::RawRow;
use crate::types::parse_amount;
use crate::validation::{Validation, Violation};

/// Applies a [`RecordSchema`] to rows.
///
/// Validation is a pure function of the row: no state is carried from one row to
/// the next, and every rule of every field is evaluated so that a row reports all
/// of its problems at once.
#[derive(Debug, Clone)]
pub struct Validator {
    schema: RecordSchema
}

impl Validator {
    pub fn new(schema: RecordSchema) -> Self {
        Self { schema }
    }

    pub fn validate(&self, row: &RawRow) -> Validation {
        let violations = self.schema.fields().iter()
            .flat_map(|field| check_field(field, row.get(&field.name)))
            .collect();

        Validation { violations }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(RecordSchema::transaction())
    }
}

fn check_field(field: &FieldSchema, value: Option<&str>) -> Vec<Violation> {
    let value = value.map(str::trim).filter(|value| !value.is_empty());

    field.rules.iter()
        .filter_map(|rule| check_rule(&field.name, rule, value))
        .collect()
}

fn check_rule(field: &str, rule: &Rule, value: Option<&str>) -> Option<Violation> {
    let broken = || Some(Violation::Rule { field: field.to_string(), rule: rule.clone() });

    //NOTE: Blank values only ever fail the Required rule, every other rule applies to supplied values
    let Some(value) = value else {
        return if *rule == Rule::Required { broken() } else { None };
    };

    match rule {
        Rule::Required => None,
        Rule::MaxLength(max) => {
            if value.chars().count() > *max { broken() } else { None }
        }
        Rule::Range { min, max } => match parse_amount(value) {
            Ok(amount) if amount < *min || amount > *max => broken(),
            Ok(_) => None,
            Err(_) => Some(Violation::NotDecimal { field: field.to_string() })
        },
        Rule::OneOf(allowed) => {
            if allowed.iter().any(|candidate| *candidate == value) { None } else { broken() }
        }
    }
}
