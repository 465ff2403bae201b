//! The essay scoring engine
//!
//! Ties the three stages together: the analyzer produces the metrics record,
//! and the scorer and feedback generator each consume that same record
//! independently. The combined [`ScoreResult`] is what every report renderer
//! consumes.

use crate::Result;
use crate::analysis::{EssayAnalyzer, EssayMetrics, GrammarChecker, SentimentAnalyzer};
use crate::feedback;
use crate::scoring::{self, Appraisal};
use serde::Serialize;

/// Log target for the engine
const LOG_TARGET: &str = " engine";

/// The complete outcome of scoring one essay.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    /// Overall quality score in [0, 100].
    pub score: u32,

    /// The metrics the score and feedback were derived from.
    pub metrics: EssayMetrics,

    /// Ordered, categorized feedback lines.
    pub feedback: Vec<String>,
}

/// The essay scoring engine.
///
/// Construction initializes the collaborator resources once; a single
/// instance can score any number of essays.
#[derive(Debug)]
pub struct EssayScorer {
    analyzer: EssayAnalyzer,
}

impl EssayScorer {
    /// Create a scorer with the default collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if a collaborator resource cannot be initialized.
    pub fn new() -> Result<Self> {
        Ok(Self {
            analyzer: EssayAnalyzer::new()?,
        })
    }

    /// Create a scorer with caller-supplied collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if the analyzer cannot be initialized.
    pub fn with_collaborators(grammar_checker: Box<dyn GrammarChecker>, sentiment_analyzer: Box<dyn SentimentAnalyzer>) -> Result<Self> {
        Ok(Self {
            analyzer: EssayAnalyzer::with_collaborators(grammar_checker, sentiment_analyzer)?,
        })
    }

    /// Analyze and score an essay.
    ///
    /// # Errors
    ///
    /// Returns an error if analysis fails; no partial result is produced.
    pub fn analyze_essay(&self, text: &str) -> Result<ScoreResult> {
        let analysis = self.analyzer.analyze(text)?;
        let score = scoring::score(&analysis.metrics);
        let feedback = feedback::generate(&analysis.metrics, &analysis.grammar_errors);

        log::info!(target: LOG_TARGET, "Essay scored {score}/100 with {} feedback line(s)", feedback.len());

        Ok(ScoreResult {
            score,
            metrics: analysis.metrics,
            feedback,
        })
    }

    /// Analyze an essay and keep the per-rule scoring breakdown alongside
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns an error if analysis fails.
    pub fn analyze_essay_with_breakdown(&self, text: &str) -> Result<(ScoreResult, Appraisal)> {
        let analysis = self.analyzer.analyze(text)?;
        let appraisal = scoring::appraise(&analysis.metrics);
        let feedback = feedback::generate(&analysis.metrics, &analysis.grammar_errors);

        let result = ScoreResult {
            score: appraisal.score,
            metrics: analysis.metrics,
            feedback,
        };

        Ok((result, appraisal))
    }
}
