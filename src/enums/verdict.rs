use std::fmt;
use serde::{Deserialize, Serialize};
use crate::config::constants::{
    EMAIL_HIGH_RISK_THRESHOLD, EMAIL_SUSPICIOUS_THRESHOLD, URL_HIGH_RISK_THRESHOLD,
    URL_SUSPICIOUS_THRESHOLD,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    #[serde(rename = "Clean")]
    Clean,
    #[serde(rename = "Suspicious")]
    Suspicious,
    #[serde(rename = "HIGH RISK")]
    HighRisk,
}

impl Verdict {
    pub const fn for_url_score(score: u32) -> Self {
        Self::from_thresholds(score, URL_SUSPICIOUS_THRESHOLD, URL_HIGH_RISK_THRESHOLD)
    }

    pub const fn for_email_score(score: u32) -> Self {
        Self::from_thresholds(score, EMAIL_SUSPICIOUS_THRESHOLD, EMAIL_HIGH_RISK_THRESHOLD)
    }

    const fn from_thresholds(score: u32, suspicious: u32, high_risk: u32) -> Self {
        if score >= high_risk {
            Self::HighRisk
        } else if score >= suspicious {
            Self::Suspicious
        } else {
            Self::Clean
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Clean => "Clean",
            Self::Suspicious => "Suspicious",
            Self::HighRisk => "HIGH RISK",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Clean => "✅",
            Self::Suspicious => "⚠️",
            Self::HighRisk => "🚨",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
