use strum::{Display, EnumIter};

/// The fixed feedback sections, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum FeedbackCategory {
    #[strum(to_string = "Structure Analysis")]
    Structure,

    #[strum(to_string = "Length Analysis")]
    Length,

    #[strum(to_string = "Sentence Structure")]
    SentenceStructure,

    #[strum(to_string = "Vocabulary Usage")]
    VocabularyUsage,

    #[strum(to_string = "Grammar and Spelling")]
    GrammarAndSpelling,

    #[strum(to_string = "Style and Tone")]
    StyleAndTone,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_order_is_fixed() {
        let order: Vec<String> = FeedbackCategory::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            order,
            vec![
                "Structure Analysis",
                "Length Analysis",
                "Sentence Structure",
                "Vocabulary Usage",
                "Grammar and Spelling",
                "Style and Tone",
            ]
        );
    }
}
