use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::to_strings;

/// A named vocabulary of phrases scanned for in email text.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PatternCategory {
    pub name: String,
    pub terms: Vec<String>,
}

impl PatternCategory {
    pub fn new(name: &str, terms: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            terms: to_strings(terms),
        }
    }
}
