//! Report generation for essay scoring results
//!
//! Two report generators are provided, each accessed through a `generate`
//! function:
//! - **Console**: Terminal output with ANSI colors, an aligned metrics
//!   section, and the categorized feedback lines
//! - **JSON**: Machine-readable structured data
//!
//! Both generators operate on the same input: a [`ScoreResult`] produced by
//! the engine, plus an optional scoring breakdown for the console report.
//! Generators write to any `core::fmt::Write` sink so callers can target a
//! string, a file buffer, or stdout.
//!
//! [`ScoreResult`]: crate::engine::ScoreResult

mod console;
mod json;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
