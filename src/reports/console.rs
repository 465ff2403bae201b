use crate::Result;
use crate::engine::ScoreResult;
use crate::scoring::Appraisal;
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

const GREEN_THRESHOLD: u32 = 80;
const YELLOW_THRESHOLD: u32 = 50;

pub fn generate<W: Write>(result: &ScoreResult, breakdown: Option<&Appraisal>, use_colors: bool, writer: &mut W) -> Result<()> {
    write_score_line(result.score, use_colors, writer)?;
    write_metrics(result, use_colors, writer)?;

    if let Some(appraisal) = breakdown {
        write_breakdown(appraisal, use_colors, writer)?;
    }

    write_feedback(&result.feedback, use_colors, writer)?;
    Ok(())
}

fn write_score_line<W: Write>(score: u32, use_colors: bool, writer: &mut W) -> Result<()> {
    if use_colors {
        write!(writer, "{}", "Essay Score: ".bold())?;
        if score >= GREEN_THRESHOLD {
            writeln!(writer, "{}", format!("{score}/100").green().bold())?;
        } else if score >= YELLOW_THRESHOLD {
            writeln!(writer, "{}", format!("{score}/100").yellow().bold())?;
        } else {
            writeln!(writer, "{}", format!("{score}/100").red().bold())?;
        }
    } else {
        writeln!(writer, "Essay Score: {score}/100")?;
    }
    Ok(())
}

fn write_metrics<W: Write>(result: &ScoreResult, use_colors: bool, writer: &mut W) -> Result<()> {
    let m = &result.metrics;
    let rows = [
        ("Word count", m.word_count.to_string()),
        ("Sentence count", m.sentence_count.to_string()),
        ("Paragraph count", m.paragraph_count.to_string()),
        ("Average words per sentence", format!("{:.1}", m.avg_words_per_sentence)),
        ("Unique words", m.unique_words.to_string()),
        ("Vocabulary richness", format!("{:.2}", m.vocabulary_richness)),
        ("Long sentences", m.long_sentences.to_string()),
        ("Short sentences", m.short_sentences.to_string()),
        ("Sentence length variation", format!("{:.1}", m.sentence_length_variation)),
        ("Grammar issues", m.grammar_error_count.to_string()),
        ("Sentiment", format!("{:.2}", m.sentiment)),
        ("Subjectivity", format!("{:.2}", m.subjectivity)),
    ];

    writeln!(writer)?;
    write_section_title(writer, "Metrics", use_colors)?;

    let max_name_len = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, value) in &rows {
        writeln!(writer, "  {name:<max_name_len$} : {value}")?;
    }
    Ok(())
}

fn write_breakdown<W: Write>(appraisal: &Appraisal, use_colors: bool, writer: &mut W) -> Result<()> {
    writeln!(writer)?;
    write_section_title(writer, "Score Breakdown", use_colors)?;

    let fired: Vec<_> = appraisal.rule_outcomes.iter().filter(|o| o.deducted > 0).collect();
    if fired.is_empty() {
        writeln!(writer, "  No deductions applied")?;
        return Ok(());
    }

    let max_name_len = fired.iter().map(|o| o.name.len()).max().unwrap_or(0);
    for outcome in &fired {
        writeln!(writer, "  {:<max_name_len$} : -{} ({})", outcome.name, outcome.deducted, outcome.description)?;
    }
    Ok(())
}

fn write_feedback<W: Write>(feedback: &[String], use_colors: bool, writer: &mut W) -> Result<()> {
    let term_width = get_terminal_width();

    for line in feedback {
        if let Some(header) = line.strip_prefix('\n').filter(|l| l.ends_with(':')) {
            writeln!(writer)?;
            write_section_title(writer, header.trim_end_matches(':'), use_colors)?;
        } else {
            for wrapped in wrap_text(line, term_width, 4) {
                writeln!(writer, "{wrapped}")?;
            }
        }
    }
    Ok(())
}

fn write_section_title<W: Write>(writer: &mut W, title: &str, use_colors: bool) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }
    Ok(())
}

/// Terminal width for wrapping, 80 when it cannot be detected.
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| usize::from(w))
}

/// Word-wrap `text` so that every line fits in `width` columns. The first
/// line carries no indentation (the caller prints it after a label);
/// continuation lines are indented by `indent` spaces.
fn wrap_text(text: &str, width: usize, indent: usize) -> Vec<String> {
    if width <= indent {
        return vec![text.to_string()];
    }

    let pad = " ".repeat(indent);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    let mut flush = |lines: &mut Vec<String>, line: String| {
        if lines.is_empty() {
            lines.push(line);
        } else {
            lines.push(format!("{pad}{line}"));
        }
    };

    for word in text.split_whitespace() {
        let used = if lines.is_empty() { current.len() } else { indent + current.len() };

        // The +1 accounts for the joining space.
        if !current.is_empty() && used + 1 + word.len() > width {
            flush(&mut lines, core::mem::take(&mut current));
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        flush(&mut lines, current);
    }

    lines
}
