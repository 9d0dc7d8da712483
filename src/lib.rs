//! Heuristic phishing detection for URLs and raw email text.
//!
//! Each analyzer runs a fixed battery of independent checks. Every check
//! yields a [`structs::check_outcome::CheckOutcome`]; a
//! [`structs::score_card::ScoreCard`] sums them in order and the final score
//! is bucketed into a [`enums::verdict::Verdict`].

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
