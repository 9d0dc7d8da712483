use serde::{Deserialize, Serialize};
use crate::enums::verdict::Verdict;

/// Outcome of scoring one URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlAnalysis {
    /// The analyzed URL, with `https://` prepended when no scheme was given.
    pub url: String,
    pub timestamp: String,
    pub risk_score: u32,
    pub verdict: Verdict,
    pub findings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
}
