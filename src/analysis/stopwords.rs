use crate::Result;
use ohno::bail;
use std::collections::HashSet;

/// The embedded English stop-word list, one word per line.
const ENGLISH_STOPWORDS: &str = include_str!("../../data/english_stopwords.txt");

/// Load the English stop-word set.
///
/// # Errors
///
/// Returns an error if the embedded list turns out to be empty, which would
/// silently break vocabulary metrics.
pub fn english() -> Result<HashSet<&'static str>> {
    let words: HashSet<&'static str> = ENGLISH_STOPWORDS.lines().map(str::trim).filter(|w| !w.is_empty()).collect();

    if words.is_empty() {
        bail!("embedded English stop-word list is empty");
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_loads() {
        let words = english().unwrap();
        assert!(words.len() > 100, "expected a substantial stop-word list, got {}", words.len());
    }

    #[test]
    fn test_common_words_present() {
        let words = english().unwrap();
        for w in ["the", "and", "is", "of", "to", "a"] {
            assert!(words.contains(w), "stop-word list should contain '{w}'");
        }
    }

    #[test]
    fn test_content_words_absent() {
        let words = english().unwrap();
        for w in ["technology", "essay", "education"] {
            assert!(!words.contains(w), "stop-word list should not contain '{w}'");
        }
    }
}
