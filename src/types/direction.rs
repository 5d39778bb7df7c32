use serde::{Deserialize, Serialize};

/// Whether a transfer leg credits or debits its account.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Credit,
    Debit
}

impl Direction {
    /// Accepted spellings in the input file. Matching is case-sensitive.
    pub const NAMES: &'static [&'static str] = &["Credit", "Debit"];
}
