//! Sentence and word segmentation for English prose.
//!
//! Thin wrappers over UAX #29 segmentation as implemented by the
//! `unicode-segmentation` crate. These are the tokenizer collaborators the
//! analyzer consumes; they are usable on whole essays as well as on a single
//! sentence.

use unicode_segmentation::UnicodeSegmentation;

/// Segment `text` into trimmed, non-empty sentences in document order.
#[must_use]
pub fn sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences().map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Segment `text` into word tokens in document order.
#[must_use]
pub fn words(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

/// Word tokens paired with their byte offset within `text`.
pub fn word_offsets<'a>(text: &'a str) -> impl Iterator<Item = (usize, &'a str)> {
    text.unicode_word_indices()
}
