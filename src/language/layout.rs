//! Fixed-column layout conventions for formatted source

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCase {
    #[default]
    Upper,
    Lower,
    Preserve,
}

impl KeywordCase {
    pub fn apply(&self, text: &str) -> String {
        match self {
            KeywordCase::Upper => text.to_uppercase(),
            KeywordCase::Lower => text.to_lowercase(),
            KeywordCase::Preserve => text.to_string(),
        }
    }
}

/// Where things go on a line. Columns are 1-origin, as they are counted in
/// a source member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub label_column: usize,
    pub command_column: usize,
    pub parameter_column: usize,
    pub continuation_column: usize,
    pub right_margin: usize,
    pub continuation: char,
    pub case: KeywordCase,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            label_column: 2,
            command_column: 14,
            parameter_column: 25,
            continuation_column: 27,
            right_margin: 70,
            continuation: '+',
            case: KeywordCase::Upper,
        }
    }
}
