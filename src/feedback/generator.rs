use super::category::FeedbackCategory;
use crate::analysis::{EssayMetrics, GrammarError};
use strum::IntoEnumIterator;

/// Word count below which an essay is reported as too short.
const MIN_WORD_COUNT: u64 = 300;

/// Word count above which an essay is affirmed as suitably detailed.
const DETAILED_WORD_COUNT: u64 = 1000;

/// Minimum paragraph count for a well-structured essay.
const MIN_PARAGRAPHS: u64 = 3;

/// How many grammar errors are listed individually before summarizing.
const MAX_LISTED_GRAMMAR_ERRORS: usize = 5;

/// Generate the ordered feedback lines for one essay.
///
/// Pure and deterministic: identical inputs produce byte-identical output.
/// Each category header is emitted unconditionally (prefixed with a blank
/// line for the text report), followed by that category's applicable lines.
#[must_use]
pub fn generate(metrics: &EssayMetrics, errors: &[GrammarError]) -> Vec<String> {
    let mut feedback = Vec::new();

    for category in FeedbackCategory::iter() {
        feedback.push(format!("\n{category}:"));

        match category {
            FeedbackCategory::Structure => structure_lines(metrics, &mut feedback),
            FeedbackCategory::Length => length_lines(metrics, &mut feedback),
            FeedbackCategory::SentenceStructure => sentence_lines(metrics, &mut feedback),
            FeedbackCategory::VocabularyUsage => vocabulary_lines(metrics, &mut feedback),
            FeedbackCategory::GrammarAndSpelling => grammar_lines(errors, &mut feedback),
            FeedbackCategory::StyleAndTone => style_lines(metrics, &mut feedback),
        }
    }

    feedback
}

fn structure_lines(metrics: &EssayMetrics, feedback: &mut Vec<String>) {
    if metrics.paragraph_count < MIN_PARAGRAPHS {
        feedback.push("- Consider organizing your essay into more paragraphs for better structure".into());
    } else {
        feedback.push("- Good paragraph structure with clear divisions".into());
    }

    feedback.push(format!(
        "- Your essay contains {} paragraphs and {} sentences",
        metrics.paragraph_count, metrics.sentence_count
    ));
}

fn length_lines(metrics: &EssayMetrics, feedback: &mut Vec<String>) {
    if metrics.word_count < MIN_WORD_COUNT {
        feedback.push(format!("- Essay length is below recommended minimum of {MIN_WORD_COUNT} words"));
        feedback.push(format!(
            "- Current word count: {} (need {} more words)",
            metrics.word_count,
            MIN_WORD_COUNT - metrics.word_count
        ));
    } else if metrics.word_count > DETAILED_WORD_COUNT {
        feedback.push("- Essay length is appropriate for detailed analysis".into());
    }
}

fn sentence_lines(metrics: &EssayMetrics, feedback: &mut Vec<String>) {
    feedback.push(format!("- Average sentence length: {:.1} words", metrics.avg_words_per_sentence));

    if metrics.long_sentences > 0 {
        feedback.push(format!("- You have {} long sentences (>25 words)", metrics.long_sentences));
    }

    if metrics.short_sentences > 0 {
        feedback.push(format!("- You have {} short sentences (<10 words)", metrics.short_sentences));
    }

    if metrics.sentence_length_variation > 10.0 {
        feedback.push("- Good variety in sentence length".into());
    }
}

fn vocabulary_lines(metrics: &EssayMetrics, feedback: &mut Vec<String>) {
    feedback.push(format!("- You used {} unique words", metrics.unique_words));

    if metrics.vocabulary_richness < 0.4 {
        feedback.push("- Consider using more varied vocabulary to enhance expression".into());
    } else if metrics.vocabulary_richness > 0.6 {
        feedback.push("- Excellent vocabulary diversity".into());
    }
}

fn grammar_lines(errors: &[GrammarError], feedback: &mut Vec<String>) {
    if errors.is_empty() {
        feedback.push("- No significant grammar or spelling issues found".into());
        return;
    }

    feedback.push(format!("- Found {} grammar/spelling issues:", errors.len()));
    for error in errors.iter().take(MAX_LISTED_GRAMMAR_ERRORS) {
        feedback.push(format!("  * {}", error.message));
    }

    if errors.len() > MAX_LISTED_GRAMMAR_ERRORS {
        feedback.push(format!("  * ({} additional issues not shown)", errors.len() - MAX_LISTED_GRAMMAR_ERRORS));
    }
}

fn style_lines(metrics: &EssayMetrics, feedback: &mut Vec<String>) {
    if metrics.subjectivity > 0.8 {
        feedback.push("- The writing style is highly subjective".into());
    } else if metrics.subjectivity < 0.2 {
        feedback.push("- The writing style is highly objective".into());
    }

    if metrics.sentiment > 0.5 {
        feedback.push("- The tone is notably positive".into());
    } else if metrics.sentiment < -0.5 {
        feedback.push("- The tone is notably negative".into());
    }
}
