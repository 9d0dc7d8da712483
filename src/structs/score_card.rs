use std::panic::{self, AssertUnwindSafe};
use crate::structs::check_outcome::CheckOutcome;

/// Folds check outcomes, in the order they are applied, into a running
/// score and an append-only list of findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreCard {
    score: u32,
    findings: Vec<String>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, outcome: CheckOutcome) {
        self.score = self.score.saturating_add(outcome.score);
        self.findings.extend(outcome.findings);
    }

    /// Runs one check and applies its outcome. A check that panics is logged
    /// and contributes nothing; later checks still run.
    pub fn run(&mut self, check: &str, f: impl FnOnce() -> CheckOutcome) {
        if let Some(outcome) = isolated(check, f) {
            self.apply(outcome);
        }
    }

    pub fn into_parts(self) -> (u32, Vec<String>) {
        (self.score, self.findings)
    }
}

/// Calls `f`, converting a panic into `None`.
pub fn isolated<R>(check: &str, f: impl FnOnce() -> R) -> Option<R> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(_) => {
            log::error!("❌ Check '{check}' panicked; skipping its contribution");
            None
        }
    }
}
