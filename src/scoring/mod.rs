//! Penalty-rubric scoring
//!
//! This module maps an [`EssayMetrics`](crate::analysis::EssayMetrics) record
//! to an integer score in [0, 100].
//!
//! # Implementation Model
//!
//! The rubric is a static table of independent named rules
//! ([`PENALTY_RUBRIC`]), each pairing a description with a deduction function
//! over the metrics record. Rules are evaluated in order, are non-exclusive
//! (several may fire for the same essay, and the two word-count rules stack),
//! and their deductions are summed and subtracted from a base of 100. The
//! result is clamped to [0, 100] even when the deductions exceed 100.
//!
//! The table is a fixed policy, not derived from data; representing it as
//! data keeps each rule unit-testable on its own and lets the CLI show a
//! per-rule breakdown ([`appraise`]).

mod rubric;
mod scorer;

pub use rubric::{PENALTY_RUBRIC, PenaltyRule};
pub use scorer::{Appraisal, RuleOutcome, appraise, score};
