use crate::Result;
use crate::analysis::tokenize;
use ohno::IntoAppError;
use regex::Regex;
use serde::Serialize;

/// Log target for the grammar checker
const LOG_TARGET: &str = " grammar";

/// A single issue flagged by a grammar checker.
#[derive(Debug, Clone, Serialize)]
pub struct GrammarError {
    /// Human-readable description of the issue.
    pub message: String,

    /// Identifier of the rule that produced the issue.
    pub rule: &'static str,

    /// Byte offset of the issue within the checked text.
    pub offset: usize,
}

/// Boundary seam for grammar-checking collaborators.
///
/// Implementations report issues in document order; that order is preserved
/// all the way into the feedback report.
pub trait GrammarChecker: core::fmt::Debug {
    /// Check `text` and return the flagged issues.
    fn check(&self, text: &str) -> Result<Vec<GrammarError>>;
}

/// One compiled pattern rule: a regex plus a message builder that receives the
/// matched text.
struct PatternRule {
    id: &'static str,
    regex: Regex,
    message: fn(&str) -> String,
}

impl core::fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PatternRule").field("id", &self.id).finish_non_exhaustive()
    }
}

/// Rule-based grammar and spelling checker.
///
/// The rule set is compiled once at construction and held for the checker's
/// lifetime; compilation failure is an initialization error. Checking itself
/// never fails.
#[derive(Debug)]
pub struct RuleBasedChecker {
    rules: Vec<PatternRule>,
}

/// Frequently-confused spellings flagged by the `misspelling` rule.
const MISSPELLINGS: &str = "teh|recieve|seperate|definately|occured|untill|wich|alot|becuase|accomodate|neccessary|tommorow|wierd|truely|arguement";

impl RuleBasedChecker {
    /// Compile the rule set.
    ///
    /// # Errors
    ///
    /// Returns an error if any rule pattern fails to compile.
    pub fn new() -> Result<Self> {
        let specs: &[(&'static str, String, fn(&str) -> String)] = &[
            (
                "double_space",
                r"\S {2,}\S".into(),
                |_| "Consecutive spaces found, use a single space".into(),
            ),
            (
                "space_before_punct",
                r"\s+[,.;:!?]".into(),
                |_| "Remove the space before the punctuation mark".into(),
            ),
            ("missing_space_after_comma", "[,;:][A-Za-z]".into(), |_| {
                "Put a space after the punctuation mark".into()
            }),
            ("missing_space_after_sentence", "[.!?][a-z]".into(), |_| {
                "Put a space after the sentence-ending punctuation".into()
            }),
            ("sentence_capitalization", r"(?:\A|[.!?]\s+)[a-z]".into(), |_| {
                "This sentence does not start with an uppercase letter".into()
            }),
            ("article_a_vowel", r"\b[Aa] [aeiouAEIOU][a-z]*".into(), |m| {
                format!("Use 'an' instead of 'a' before a vowel sound: '{}'", m.trim())
            }),
            ("article_an_consonant", r"\b[Aa]n [b-df-hj-np-tv-z][a-z]*".into(), |m| {
                format!("Use 'a' instead of 'an' before a consonant sound: '{}'", m.trim())
            }),
            ("misspelling", format!(r"(?i)\b(?:{MISSPELLINGS})\b"), |m| {
                format!("Possible spelling mistake: '{m}'")
            }),
        ];

        let mut rules = Vec::with_capacity(specs.len() + 1);
        for &(id, ref pattern, message) in specs {
            let regex = Regex::new(pattern).into_app_err_with(|| format!("unable to compile grammar rule '{id}'"))?;
            rules.push(PatternRule { id, regex, message });
        }

        Ok(Self { rules })
    }

    /// Flag immediately repeated words ("the the"), which the pattern rules
    /// cannot express without backreferences.
    fn check_repeated_words(text: &str, errors: &mut Vec<GrammarError>) {
        let mut prev: Option<(usize, &str)> = None;
        for (offset, word) in tokenize::word_offsets(text) {
            if let Some((prev_offset, prev_word)) = prev {
                let gap = &text[prev_offset + prev_word.len()..offset];
                if word.eq_ignore_ascii_case(prev_word) && gap.chars().all(char::is_whitespace) {
                    errors.push(GrammarError {
                        message: format!("Possible typo: repeated word '{word}'"),
                        rule: "repeated_word",
                        offset,
                    });
                }
            }
            prev = Some((offset, word));
        }
    }
}

impl GrammarChecker for RuleBasedChecker {
    fn check(&self, text: &str) -> Result<Vec<GrammarError>> {
        let mut errors = Vec::new();

        for rule in &self.rules {
            for m in rule.regex.find_iter(text) {
                errors.push(GrammarError {
                    message: (rule.message)(m.as_str()),
                    rule: rule.id,
                    offset: m.start(),
                });
            }
        }

        Self::check_repeated_words(text, &mut errors);

        // Stable sort puts issues in document order while keeping rule order
        // for issues at the same offset.
        errors.sort_by_key(|e| e.offset);

        log::debug!(target: LOG_TARGET, "Flagged {} issue(s)", errors.len());
        Ok(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> RuleBasedChecker {
        RuleBasedChecker::new().unwrap()
    }

    #[test]
    fn test_rule_set_compiles() {
        let c = checker();
        assert!(!c.rules.is_empty());
    }

    #[test]
    fn test_clean_text_has_no_errors() {
        let errors = checker().check("This is a clean sentence. It has no problems at all.").unwrap();
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_repeated_word() {
        let errors = checker().check("This is the the problem.").unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "repeated_word");
        assert!(errors[0].message.contains("the"));
    }

    #[test]
    fn test_repeated_word_across_sentences_not_flagged() {
        let errors = checker().check("It was cold. Cold was everywhere after the storm came down.").unwrap();
        assert!(errors.iter().all(|e| e.rule != "repeated_word"), "unexpected: {errors:?}");
    }

    #[test]
    fn test_misspelling() {
        let errors = checker().check("I will recieve the package.").unwrap();
        assert!(errors.iter().any(|e| e.rule == "misspelling" && e.message.contains("recieve")));
    }

    #[test]
    fn test_misspelling_matches_case_insensitively() {
        let errors = checker().check("Teh package arrived. DEFINATELY worth the wait.").unwrap();
        let count = errors.iter().filter(|e| e.rule == "misspelling").count();
        assert_eq!(count, 2, "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_double_space() {
        let errors = checker().check("Too  many spaces here.").unwrap();
        assert!(errors.iter().any(|e| e.rule == "double_space"));
    }

    #[test]
    fn test_space_before_punctuation() {
        let errors = checker().check("This is wrong , very wrong.").unwrap();
        assert!(errors.iter().any(|e| e.rule == "space_before_punct"));
    }

    #[test]
    fn test_article_agreement() {
        let errors = checker().check("She saw a elephant and an dog.").unwrap();
        assert!(errors.iter().any(|e| e.rule == "article_a_vowel"));
        assert!(errors.iter().any(|e| e.rule == "article_an_consonant"));
    }

    #[test]
    fn test_sentence_capitalization() {
        let errors = checker().check("the start is lowercase. so is this one.").unwrap();
        let count = errors.iter().filter(|e| e.rule == "sentence_capitalization").count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_errors_in_document_order() {
        let errors = checker().check("the day began. I will recieve the the box.").unwrap();
        let offsets: Vec<_> = errors.iter().map(|e| e.offset).collect();
        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        assert_eq!(offsets, sorted);
        assert!(errors.len() >= 3);
    }
}
