//! Categorized feedback generation
//!
//! Maps a metrics record plus the raw grammar-error list into an ordered list
//! of human-readable feedback lines. Every category emits its header
//! unconditionally, followed by zero or more conditional lines; the category
//! order is fixed by the [`FeedbackCategory`] declaration order. Generation
//! is pure: the same inputs always produce byte-identical output.

mod category;
mod generator;

pub use category::FeedbackCategory;
pub use generator::generate;
