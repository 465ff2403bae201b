use crate::analysis::EssayMetrics;

/// Largest deduction the grammar rule may apply.
const GRAMMAR_PENALTY_CAP: u64 = 20;

/// Points deducted per grammar issue, before the cap.
const GRAMMAR_PENALTY_PER_ERROR: u64 = 2;

/// One independent scoring rule: a named condition over the metrics record
/// and the points it deducts when the condition holds.
#[derive(Debug)]
pub struct PenaltyRule {
    pub name: &'static str,
    pub description: &'static str,

    /// Points to deduct for the given metrics, 0 when the rule does not apply.
    pub deduction: fn(&EssayMetrics) -> u64,
}

macro_rules! penalty_rule {
    ($name:expr, $description:expr, $deduction:expr) => {
        PenaltyRule {
            name: $name,
            description: $description,
            deduction: $deduction,
        }
    };
}

/// The fixed scoring rubric, applied cumulatively against a base of 100.
pub const PENALTY_RUBRIC: &[PenaltyRule] = &[
    penalty_rule!("length.below_minimum", "Essay is shorter than the recommended 300 words", |m| {
        if m.word_count < 300 { 10 } else { 0 }
    }),
    // Stacks with `length.below_minimum` for very short essays.
    penalty_rule!("length.very_short", "Essay is shorter than 200 words", |m| {
        if m.word_count < 200 { 10 } else { 0 }
    }),
    penalty_rule!("sentences.too_long_on_average", "Sentences average more than 30 words", |m| {
        if m.avg_words_per_sentence > 30.0 { 5 } else { 0 }
    }),
    penalty_rule!("sentences.too_short_on_average", "Sentences average fewer than 10 words", |m| {
        if m.avg_words_per_sentence < 10.0 { 5 } else { 0 }
    }),
    penalty_rule!("vocabulary.low_richness", "Vocabulary richness is below 0.4", |m| {
        if m.vocabulary_richness < 0.4 { 10 } else { 0 }
    }),
    penalty_rule!("grammar.issues_found", "Two points per grammar issue, capped at 20", |m| {
        (m.grammar_error_count * GRAMMAR_PENALTY_PER_ERROR).min(GRAMMAR_PENALTY_CAP)
    }),
    // Strictly more than half; 2 * long > total sidesteps the division.
    penalty_rule!("sentences.long_majority", "More than half of the sentences exceed 25 words", |m| {
        if m.long_sentences * 2 > m.sentence_count { 5 } else { 0 }
    }),
    penalty_rule!(
        "structure.too_few_paragraphs",
        "Fewer than 3 paragraphs in an essay of over 300 words",
        |m| {
            if m.paragraph_count < 3 && m.word_count > 300 { 5 } else { 0 }
        }
    ),
];
