use crate::Result;
use crate::analysis::essay_metrics::EssayMetrics;
use crate::analysis::grammar::{GrammarChecker, GrammarError, RuleBasedChecker};
use crate::analysis::sentiment::{LexiconSentimentAnalyzer, SentimentAnalyzer};
use crate::analysis::{stopwords, tokenize};
use std::collections::HashSet;

/// Log target for the analyzer
const LOG_TARGET: &str = " analyzer";

/// Everything the analyzer produces for one essay: the metrics record plus
/// the raw grammar issues in the order the checker reported them.
#[derive(Debug)]
pub struct EssayAnalysis {
    pub metrics: EssayMetrics,
    pub grammar_errors: Vec<GrammarError>,
}

/// Computes an [`EssayMetrics`] record for raw essay text.
///
/// The collaborators (grammar checker, sentiment analyzer, stop-word set) are
/// acquired once at construction and held for the analyzer's lifetime.
/// Analysis takes `&self` and keeps no mutable state, so concurrent callers
/// only need to serialize access if their collaborator implementations
/// require it.
#[derive(Debug)]
pub struct EssayAnalyzer {
    grammar_checker: Box<dyn GrammarChecker>,
    sentiment_analyzer: Box<dyn SentimentAnalyzer>,
    stop_words: HashSet<&'static str>,
}

impl EssayAnalyzer {
    /// Create an analyzer with the default rule-based grammar checker and
    /// lexicon-based sentiment analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if any collaborator resource cannot be initialized.
    pub fn new() -> Result<Self> {
        Self::with_collaborators(Box::new(RuleBasedChecker::new()?), Box::new(LexiconSentimentAnalyzer::new()?))
    }

    /// Create an analyzer with caller-supplied collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if the stop-word set cannot be loaded.
    pub fn with_collaborators(grammar_checker: Box<dyn GrammarChecker>, sentiment_analyzer: Box<dyn SentimentAnalyzer>) -> Result<Self> {
        Ok(Self {
            grammar_checker,
            sentiment_analyzer,
            stop_words: stopwords::english()?,
        })
    }

    /// Analyze `text`, producing the metrics record and grammar issues.
    ///
    /// Degenerate inputs (empty text, no sentences, no non-stopword tokens)
    /// are not errors; every ratio guards its denominator and yields 0.
    ///
    /// # Errors
    ///
    /// Returns an error if a collaborator fails; no partial result is
    /// produced in that case.
    pub fn analyze(&self, text: &str) -> Result<EssayAnalysis> {
        let sentences = tokenize::sentences(text);
        let words = tokenize::words(text);

        let filtered: Vec<String> = words
            .iter()
            .filter(|w| w.chars().all(char::is_alphanumeric))
            .map(|w| w.to_lowercase())
            .filter(|w| !self.stop_words.contains(w.as_str()))
            .collect();
        let distinct: HashSet<&str> = filtered.iter().map(String::as_str).collect();

        // Each sentence is re-tokenized on its own. The sum of these counts
        // can diverge from `words.len()` at sentence boundaries; the metric
        // definitions keep that divergence.
        let sentence_lengths: Vec<u64> = sentences.iter().map(|s| tokenize::words(s).len() as u64).collect();

        let word_count = words.len() as u64;
        let sentence_count = sentences.len() as u64;
        let paragraph_count = text.lines().filter(|line| !line.trim().is_empty()).count() as u64;

        let grammar_errors = self.grammar_checker.check(text)?;
        let sentiment = self.sentiment_analyzer.assess(text)?;

        let metrics = EssayMetrics {
            word_count,
            sentence_count,
            avg_words_per_sentence: ratio(word_count, sentence_count),
            unique_words: distinct.len() as u64,
            vocabulary_richness: ratio(distinct.len() as u64, filtered.len() as u64),
            paragraph_count,
            avg_sentence_length: ratio(sentence_lengths.iter().sum(), sentence_count),
            long_sentences: sentence_lengths.iter().filter(|&&n| n > 25).count() as u64,
            short_sentences: sentence_lengths.iter().filter(|&&n| n < 10).count() as u64,
            grammar_error_count: grammar_errors.len() as u64,
            sentence_length_variation: sample_std_dev(&sentence_lengths),
            sentiment: sentiment.polarity,
            subjectivity: sentiment.subjectivity,
        };

        log::debug!(
            target: LOG_TARGET,
            "Analyzed {word_count} word(s) across {sentence_count} sentence(s), {} grammar issue(s)",
            grammar_errors.len()
        );

        Ok(EssayAnalysis { metrics, grammar_errors })
    }
}

/// `numerator / denominator` as a float, 0 when the denominator is 0.
#[expect(clippy::cast_precision_loss, reason = "Counts are far below the point where f64 loses precision")]
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Bessel-corrected sample standard deviation, 0 when fewer than 2 samples.
#[expect(clippy::cast_precision_loss, reason = "Counts are far below the point where f64 loses precision")]
fn sample_std_dev(samples: &[u64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<u64>() as f64 / n;
    let variance = samples.iter().map(|&x| (x as f64 - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Sentiment;

    /// Grammar checker returning a fixed error list.
    #[derive(Debug)]
    struct FixedChecker(Vec<GrammarError>);

    impl GrammarChecker for FixedChecker {
        fn check(&self, _text: &str) -> Result<Vec<GrammarError>> {
            Ok(self.0.clone())
        }
    }

    /// Sentiment analyzer returning a fixed assessment.
    #[derive(Debug)]
    struct FixedSentiment(Sentiment);

    impl SentimentAnalyzer for FixedSentiment {
        fn assess(&self, _text: &str) -> Result<Sentiment> {
            Ok(self.0)
        }
    }

    /// Grammar checker that always fails.
    #[derive(Debug)]
    struct FailingChecker;

    impl GrammarChecker for FailingChecker {
        fn check(&self, _text: &str) -> Result<Vec<GrammarError>> {
            Err(ohno::app_err!("grammar service unavailable"))
        }
    }

    fn neutral_analyzer() -> EssayAnalyzer {
        EssayAnalyzer::with_collaborators(
            Box::new(FixedChecker(Vec::new())),
            Box::new(FixedSentiment(Sentiment {
                polarity: 0.0,
                subjectivity: 0.0,
            })),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_text() {
        let analysis = neutral_analyzer().analyze("").unwrap();
        let m = &analysis.metrics;
        assert_eq!(m.word_count, 0);
        assert_eq!(m.sentence_count, 0);
        assert_eq!(m.paragraph_count, 0);
        assert!((m.avg_words_per_sentence - 0.0).abs() < f64::EPSILON);
        assert!((m.vocabulary_richness - 0.0).abs() < f64::EPSILON);
        assert!((m.sentence_length_variation - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_sentence_has_zero_variation() {
        let analysis = neutral_analyzer().analyze("One single sentence lives here.").unwrap();
        assert_eq!(analysis.metrics.sentence_count, 1);
        assert!((analysis.metrics.sentence_length_variation - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_word_and_sentence_counts() {
        let analysis = neutral_analyzer().analyze("Cats sleep all day. Dogs bark at night.").unwrap();
        let m = &analysis.metrics;
        assert_eq!(m.sentence_count, 2);
        assert_eq!(m.word_count, 8);
        assert!((m.avg_words_per_sentence - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_paragraph_count_counts_nonblank_lines() {
        let analysis = neutral_analyzer().analyze("First line.\nSecond line.\nThird line.").unwrap();
        assert_eq!(analysis.metrics.paragraph_count, 3);
    }

    #[test]
    fn test_paragraph_count_skips_blank_lines() {
        let text = "First paragraph here.\nStill more prose.\n\nSecond paragraph here.\n\n   \n\nThird paragraph here.";
        let analysis = neutral_analyzer().analyze(text).unwrap();
        assert_eq!(analysis.metrics.paragraph_count, 4);
    }

    #[test]
    fn test_stopwords_excluded_from_vocabulary() {
        // "the" and "is" are stopwords; "sky" and "blue" are not.
        let analysis = neutral_analyzer().analyze("The sky is blue.").unwrap();
        let m = &analysis.metrics;
        assert_eq!(m.unique_words, 2);
        assert!((m.vocabulary_richness - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vocabulary_richness_with_repeats() {
        let analysis = neutral_analyzer().analyze("Blue blue blue sky.").unwrap();
        let m = &analysis.metrics;
        assert_eq!(m.unique_words, 2);
        assert!((m.vocabulary_richness - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_stopword_text_has_zero_richness() {
        let analysis = neutral_analyzer().analyze("The and of to.").unwrap();
        let m = &analysis.metrics;
        assert_eq!(m.unique_words, 0);
        assert!((m.vocabulary_richness - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sentence_classification_bounds() {
        // 4 tokens: short. 26 tokens: long. 12 tokens: neither of the two.
        let short = "Only four words here.";
        let neither = "This middle sentence has a comfortable number of word tokens inside it.";
        let long = "This deliberately rambling sentence keeps going and going with far more than twenty five separate word \
                    tokens so that it lands squarely in the long bucket.";
        let text = format!("{short} {neither} {long}");
        let analysis = neutral_analyzer().analyze(&text).unwrap();
        let m = &analysis.metrics;
        assert_eq!(m.sentence_count, 3);
        assert_eq!(m.short_sentences, 1);
        assert_eq!(m.long_sentences, 1);
    }

    #[test]
    fn test_sample_std_dev() {
        assert!((sample_std_dev(&[]) - 0.0).abs() < f64::EPSILON);
        assert!((sample_std_dev(&[7]) - 0.0).abs() < f64::EPSILON);
        // Sample std dev of [2, 4, 4, 4, 5, 5, 7, 9] is ~2.138.
        let sd = sample_std_dev(&[2, 4, 4, 4, 5, 5, 7, 9]);
        assert!((sd - 2.138).abs() < 0.001, "got {sd}");
    }

    #[test]
    fn test_grammar_errors_pass_through_in_order() {
        let errors = vec![
            GrammarError {
                message: "first".into(),
                rule: "r1",
                offset: 0,
            },
            GrammarError {
                message: "second".into(),
                rule: "r2",
                offset: 5,
            },
        ];
        let analyzer = EssayAnalyzer::with_collaborators(
            Box::new(FixedChecker(errors)),
            Box::new(FixedSentiment(Sentiment {
                polarity: 0.0,
                subjectivity: 0.0,
            })),
        )
        .unwrap();

        let analysis = analyzer.analyze("Some text.").unwrap();
        assert_eq!(analysis.metrics.grammar_error_count, 2);
        assert_eq!(analysis.grammar_errors[0].message, "first");
        assert_eq!(analysis.grammar_errors[1].message, "second");
    }

    #[test]
    fn test_collaborator_failure_aborts_analysis() {
        let analyzer = EssayAnalyzer::with_collaborators(
            Box::new(FailingChecker),
            Box::new(FixedSentiment(Sentiment {
                polarity: 0.0,
                subjectivity: 0.0,
            })),
        )
        .unwrap();

        let result = analyzer.analyze("Some text.");
        assert!(result.is_err());
    }

    #[test]
    fn test_sentiment_flows_into_metrics() {
        let analyzer = EssayAnalyzer::with_collaborators(
            Box::new(FixedChecker(Vec::new())),
            Box::new(FixedSentiment(Sentiment {
                polarity: 0.6,
                subjectivity: 0.9,
            })),
        )
        .unwrap();

        let analysis = analyzer.analyze("Some text.").unwrap();
        assert!((analysis.metrics.sentiment - 0.6).abs() < f64::EPSILON);
        assert!((analysis.metrics.subjectivity - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_analyzer_constructs() {
        let analyzer = EssayAnalyzer::new().unwrap();
        let analysis = analyzer.analyze("A clean short sentence.").unwrap();
        assert_eq!(analysis.metrics.sentence_count, 1);
    }
}
