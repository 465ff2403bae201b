use serde::Serialize;

/// Flat record of surface-level metrics computed for one essay.
///
/// Built once per analysis and never mutated afterwards. All ratio fields
/// guard against zero denominators and report 0 instead. No field is ever
/// negative except `sentiment`, which ranges over [-1, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EssayMetrics {
    /// Total word tokens in the essay.
    pub word_count: u64,

    /// Total sentences in the essay.
    pub sentence_count: u64,

    /// `word_count / sentence_count`, 0 if there are no sentences.
    pub avg_words_per_sentence: f64,

    /// Distinct non-stopword alphanumeric tokens, lowercased.
    pub unique_words: u64,

    /// `unique_words` over the total count of non-stopword tokens, in [0, 1].
    pub vocabulary_richness: f64,

    /// Non-blank lines in the essay.
    pub paragraph_count: u64,

    /// Mean token count per sentence, with each sentence re-tokenized
    /// individually. May differ slightly from `avg_words_per_sentence`.
    pub avg_sentence_length: f64,

    /// Sentences with more than 25 tokens.
    pub long_sentences: u64,

    /// Sentences with fewer than 10 tokens.
    pub short_sentences: u64,

    /// Issues flagged by the grammar checker.
    pub grammar_error_count: u64,

    /// Sample standard deviation of per-sentence token counts, 0 when there
    /// are fewer than 2 sentences.
    pub sentence_length_variation: f64,

    /// Polarity in [-1, 1].
    pub sentiment: f64,

    /// Subjectivity in [0, 1].
    pub subjectivity: f64,
}

#[cfg(test)]
impl EssayMetrics {
    /// A record that trips no rubric rule and fires no conditional feedback.
    pub(crate) fn fixture() -> Self {
        Self {
            word_count: 500,
            sentence_count: 25,
            avg_words_per_sentence: 20.0,
            unique_words: 200,
            vocabulary_richness: 0.5,
            paragraph_count: 5,
            avg_sentence_length: 20.0,
            long_sentences: 0,
            short_sentences: 0,
            grammar_error_count: 0,
            sentence_length_variation: 4.0,
            sentiment: 0.0,
            subjectivity: 0.5,
        }
    }
}
