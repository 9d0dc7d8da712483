use serde::{Deserialize, Serialize};
use crate::enums::verdict::Verdict;

/// Outcome of scoring one raw email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailAnalysis {
    /// Short SHA-256 fingerprint of the raw text.
    pub email_hash: String,
    pub timestamp: String,
    pub risk_score: u32,
    pub verdict: Verdict,
    pub findings: Vec<String>,
    pub links_found: Vec<String>,
    pub patterns_found: Vec<String>,
}
