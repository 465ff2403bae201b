use crate::Result;
use crate::analysis::tokenize;
use ohno::{IntoAppError, app_err, bail};
use std::collections::HashMap;

/// Log target for the sentiment analyzer
const LOG_TARGET: &str = " sentiment";

/// The embedded sentiment lexicon: `word polarity subjectivity` per line.
const LEXICON: &str = include_str!("../../data/sentiment_lexicon.txt");

/// Dampening factor applied to the polarity of a negated word.
const NEGATION_FACTOR: f64 = -0.5;

/// Polarity and subjectivity assessment for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    /// Polarity in [-1, 1]; negative values read as negative tone.
    pub polarity: f64,

    /// Subjectivity in [0, 1]; 0 is fully objective.
    pub subjectivity: f64,
}

/// Boundary seam for sentiment-analysis collaborators.
pub trait SentimentAnalyzer: core::fmt::Debug {
    /// Assess the polarity and subjectivity of `text`.
    fn assess(&self, text: &str) -> Result<Sentiment>;
}

/// Lexicon-based sentiment analyzer.
///
/// Averages per-word polarity and subjectivity over the tokens that appear in
/// the lexicon, with simple negation handling ("not good" scores below
/// neutral). Text matching no lexicon entry assesses as fully neutral and
/// objective.
#[derive(Debug)]
pub struct LexiconSentimentAnalyzer {
    lexicon: HashMap<&'static str, (f64, f64)>,
}

impl LexiconSentimentAnalyzer {
    /// Parse and validate the embedded lexicon.
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon is malformed, contains out-of-range
    /// values, or is empty.
    pub fn new() -> Result<Self> {
        let mut lexicon = HashMap::new();

        for (line_number, line) in LEXICON.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            let (Some(word), Some(polarity), Some(subjectivity), None) = (parts.next(), parts.next(), parts.next(), parts.next())
            else {
                bail!("malformed sentiment lexicon entry on line {}", line_number + 1);
            };

            let polarity = polarity
                .parse::<f64>()
                .into_app_err_with(|| format!("invalid polarity for lexicon word '{word}'"))?;
            let subjectivity = subjectivity
                .parse::<f64>()
                .into_app_err_with(|| format!("invalid subjectivity for lexicon word '{word}'"))?;

            if !(-1.0..=1.0).contains(&polarity) {
                return Err(app_err!("polarity {polarity} for lexicon word '{word}' is outside [-1, 1]"));
            }

            if !(0.0..=1.0).contains(&subjectivity) {
                return Err(app_err!("subjectivity {subjectivity} for lexicon word '{word}' is outside [0, 1]"));
            }

            let _ = lexicon.insert(word, (polarity, subjectivity));
        }

        if lexicon.is_empty() {
            bail!("embedded sentiment lexicon is empty");
        }

        Ok(Self { lexicon })
    }

    fn is_negator(word: &str) -> bool {
        matches!(word, "not" | "no" | "never" | "neither" | "nor" | "cannot" | "hardly" | "barely") || word.ends_with("n't")
    }
}

impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    fn assess(&self, text: &str) -> Result<Sentiment> {
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut matched = 0u32;
        let mut negated = false;

        for word in tokenize::words(text) {
            let word = word.to_lowercase();

            if Self::is_negator(&word) {
                negated = true;
                continue;
            }

            if let Some(&(polarity, subjectivity)) = self.lexicon.get(word.as_str()) {
                polarity_sum += if negated { polarity * NEGATION_FACTOR } else { polarity };
                subjectivity_sum += subjectivity;
                matched += 1;
            }

            negated = false;
        }

        if matched == 0 {
            return Ok(Sentiment {
                polarity: 0.0,
                subjectivity: 0.0,
            });
        }

        let sentiment = Sentiment {
            polarity: (polarity_sum / f64::from(matched)).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / f64::from(matched)).clamp(0.0, 1.0),
        };

        log::debug!(
            target: LOG_TARGET,
            "Matched {matched} lexicon word(s): polarity {:.3}, subjectivity {:.3}",
            sentiment.polarity,
            sentiment.subjectivity
        );

        Ok(sentiment)
    }
}
