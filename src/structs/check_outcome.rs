/// What a single heuristic check contributes to a score card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    pub score: u32,
    pub findings: Vec<String>,
}

impl CheckOutcome {
    pub const fn none() -> Self {
        Self {
            score: 0,
            findings: Vec::new(),
        }
    }

    pub fn flag(score: u32, finding: impl Into<String>) -> Self {
        Self {
            score,
            findings: vec![finding.into()],
        }
    }

    /// A finding that carries no score, e.g. an informational gap.
    pub fn note(finding: impl Into<String>) -> Self {
        Self::flag(0, finding)
    }

    pub fn is_empty(&self) -> bool {
        self.score == 0 && self.findings.is_empty()
    }
}

/// `count × weight`, saturating at `u32::MAX`.
pub fn weighted(count: usize, weight: u32) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX).saturating_mul(weight)
}
