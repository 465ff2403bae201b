//! Text analysis and metric extraction
//!
//! This module turns raw essay text into a flat [`EssayMetrics`] record plus the
//! ordered list of grammar issues found in the text. It owns the boundary seams
//! to the NLP collaborators:
//!
//! - [`tokenize`]: Unicode-aware sentence and word segmentation
//! - [`GrammarChecker`]: grammar/spelling checking (default: rule-based)
//! - [`SentimentAnalyzer`]: polarity/subjectivity assessment (default: lexicon-based)
//!
//! # Implementation Model
//!
//! [`EssayAnalyzer`] holds the collaborators for its lifetime; the expensive
//! resources (compiled grammar rules, parsed sentiment lexicon, stop-word set)
//! are acquired once at construction and construction failures surface to the
//! caller. `analyze` is a single blocking call chain (tokenize, then grammar
//! check, then sentiment) and any collaborator failure aborts the whole
//! analysis; no metric is synthesized from missing data.
//!
//! Per-sentence token counts are recomputed by re-tokenizing each sentence
//! rather than reusing the whole-text tokenization. The two can diverge
//! slightly; that divergence is part of the metric definitions and is
//! deliberately kept.

mod analyzer;
mod essay_metrics;
mod grammar;
mod sentiment;
mod stopwords;
pub mod tokenize;

pub use analyzer::{EssayAnalysis, EssayAnalyzer};
pub use essay_metrics::EssayMetrics;
pub use grammar::{GrammarChecker, GrammarError, RuleBasedChecker};
pub use sentiment::{LexiconSentimentAnalyzer, Sentiment, SentimentAnalyzer};
