use super::rubric::PENALTY_RUBRIC;
use crate::analysis::EssayMetrics;

/// Base every essay starts from before deductions.
const BASE_SCORE: u64 = 100;

/// The deduction a single rubric rule applied to an essay.
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    pub name: &'static str,
    pub description: &'static str,
    pub deducted: u64,
}

/// The outcome of scoring an essay against the full rubric.
#[derive(Debug, Clone)]
pub struct Appraisal {
    pub score: u32,
    pub rule_outcomes: Vec<RuleOutcome>,
}

/// Score a metrics record against the rubric.
///
/// Pure and deterministic; always in [0, 100].
#[must_use]
pub fn score(metrics: &EssayMetrics) -> u32 {
    appraise(metrics).score
}

/// Score a metrics record and keep the per-rule breakdown.
#[must_use]
pub fn appraise(metrics: &EssayMetrics) -> Appraisal {
    let rule_outcomes: Vec<RuleOutcome> = PENALTY_RUBRIC
        .iter()
        .map(|rule| RuleOutcome {
            name: rule.name,
            description: rule.description,
            deducted: (rule.deduction)(metrics),
        })
        .collect();

    let total_deducted: u64 = rule_outcomes.iter().map(|o| o.deducted).sum();
    #[expect(clippy::cast_possible_truncation, reason = "Score is at most 100 after the saturating subtraction")]
    let score = BASE_SCORE.saturating_sub(total_deducted) as u32;

    Appraisal { score, rule_outcomes }
}
