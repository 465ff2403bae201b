//! A tool to analyze and score essays based on measurable writing qualities.
//!
//! # Overview
//!
//! `prose-rank` reads an essay, measures a set of structural and stylistic
//! properties of the text, applies a fixed penalty rubric to those
//! measurements, and reports a 0-100 quality score along with categorized
//! feedback explaining how the essay could be improved.
//!
//! # Installation
//!
//! ```bash
//! cargo install prose-rank
//! ```
//!
//! # Quick Start
//!
//! Score an essay from a file:
//!
//! ```bash
//! prose-rank essay.txt
//! ```
//!
//! Or pipe text straight in:
//!
//! ```bash
//! cat essay.txt | prose-rank
//! ```
//!
//! This displays a color-coded console report showing the overall score,
//! the measured metrics, and feedback grouped into sections such as
//! Structure Analysis, Vocabulary Usage, and Grammar and Spelling.
//!
//! # Output Formats
//!
//! ## Console Output (Default)
//!
//! By default, prose-rank displays a formatted console report:
//!
//! ```bash
//! prose-rank essay.txt
//! # Shows:
//! # Essay Score: 85/100
//! #
//! # Metrics
//! #   Word count                 : 523
//! #   Sentence count             : 25
//! #   ...
//! #
//! # Structure Analysis
//! # - Your essay contains 5 paragraphs and 25 sentences
//! ```
//!
//! The score is color-coded: green for 80 and above, yellow for 50-79,
//! red below 50.
//!
//! ## Detailed Explanations
//!
//! Show the per-rule score breakdown:
//!
//! ```bash
//! prose-rank essay.txt --explain
//! ```
//!
//! This lists every rubric rule that deducted points, with the deduction
//! amount and the rule's description.
//!
//! ## JSON Output
//!
//! Emit the full result as machine-readable JSON:
//!
//! ```bash
//! prose-rank essay.txt --json
//! ```
//!
//! The JSON document contains the score, the complete metrics record, and
//! the ordered feedback lines.
//!
//! # Scoring System
//!
//! Every essay starts at 100 points. A fixed rubric of penalty rules
//! inspects the measured metrics and deducts points for weaknesses:
//!
//! - **Length**: essays under 300 words lose 10 points, under 200 words
//!   another 10
//! - **Sentence flow**: averages above 30 or below 10 words per sentence
//!   each cost 5 points, and a majority of very long sentences costs 5 more
//! - **Vocabulary**: a unique-to-total word ratio below 0.4 costs 10 points
//! - **Grammar**: 2 points per detected issue, capped at 20
//! - **Structure**: fewer than 3 paragraphs in a 300+ word essay costs
//!   5 points
//!
//! The final score is clamped to the 0-100 range.
//!
//! # Examples
//!
//! Score and capture the result for further processing:
//!
//! ```bash
//! prose-rank essay.txt --json | jq .score
//! ```
//!
//! Investigate a low score:
//!
//! ```bash
//! prose-rank essay.txt --explain --color never > audit.txt
//! ```

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use prose_rank::Result;

mod commands;

use crate::commands::{ScoreArgs, process_essay};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "prose-rank", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    args: ScoreArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    process_essay(&cli.args)
}
