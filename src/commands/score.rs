//! The score command: read an essay, run the pipeline, render a report.

use clap::Parser;
use clap::ValueEnum;
use ohno::IntoAppError;
use prose_rank::Result;
use prose_rank::engine::EssayScorer;
use prose_rank::misc::ColorMode;
use prose_rank::reports::{generate_console, generate_json};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Path to the essay text file, or '-' to read from standard input
    #[arg(value_name = "PATH", default_value = "-")]
    pub essay: PathBuf,

    /// Show the per-rule score breakdown alongside the report
    #[arg(long)]
    pub explain: bool,

    /// Emit the result as JSON instead of the console report
    #[arg(long)]
    pub json: bool,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

pub fn process_essay(args: &ScoreArgs) -> Result<()> {
    init_logging(args.log_level);

    let text = read_essay(&args.essay)?;
    let scorer = EssayScorer::new()?;

    let mut output = String::new();
    if args.json {
        let result = scorer.analyze_essay(&text)?;
        generate_json(&result, &mut output)?;
    } else if args.explain {
        let (result, appraisal) = scorer.analyze_essay_with_breakdown(&text)?;
        generate_console(&result, Some(&appraisal), args.color.use_colors(), &mut output)?;
    } else {
        let result = scorer.analyze_essay(&text)?;
        generate_console(&result, None, args.color.use_colors(), &mut output)?;
    }

    print!("{output}");
    Ok(())
}

fn read_essay(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        let _ = std::io::stdin()
            .read_to_string(&mut text)
            .into_app_err("unable to read essay from standard input")?;
        Ok(text)
    } else {
        fs::read_to_string(path).into_app_err_with(|| format!("unable to read essay file '{}'", path.display()))
    }
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    if log_level == LogLevel::None {
        return;
    }

    let level = match log_level {
        LogLevel::None => return, // Already checked above, but being explicit
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug) || matches!(log_level, LogLevel::Trace))
        .init();
}
