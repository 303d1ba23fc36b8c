//! Boundary to the external annotation pipeline.
//!
//! Tokenization, tagging, lemmatization, dependency parsing and sentence
//! segmentation all happen outside this crate. Implementations of
//! [`AnnotationPipeline`] translate whatever the pipeline produces into
//! [`AnnotatedSentence`] values.

pub mod command;
pub mod conllu;
pub mod markdown;

pub use command::CommandPipeline;
pub use conllu::{parse_conllu, ConlluPipeline};
pub use markdown::strip_markdown;

use crate::core::{Result, Token};

/// Sentence text with its token sequence, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotatedSentence {
    pub text: String,
    pub tokens: Vec<Token>,
}

impl AnnotatedSentence {
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }

    /// Concatenate sentences into one, shifting token and head indices by the
    /// running token offset. Texts are joined with a single space.
    pub fn merge(sentences: Vec<AnnotatedSentence>) -> AnnotatedSentence {
        let mut text = String::new();
        let mut tokens = Vec::new();

        for sentence in sentences {
            let offset = tokens.len();
            if !text.is_empty() && !sentence.text.is_empty() {
                text.push(' ');
            }
            text.push_str(&sentence.text);
            tokens.extend(sentence.tokens.into_iter().map(|mut token| {
                token.index += offset;
                token.head_index += offset;
                token
            }));
        }

        AnnotatedSentence { text, tokens }
    }
}

/// Segments and annotates raw text.
pub trait AnnotationPipeline: Send + Sync {
    /// Annotate `text`, returning its sentences in input order.
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedSentence>>;
}

impl<T: AnnotationPipeline + ?Sized> AnnotationPipeline for &T {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedSentence>> {
        (**self).annotate(text)
    }
}

impl<T: AnnotationPipeline + ?Sized> AnnotationPipeline for Box<T> {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedSentence>> {
        (**self).annotate(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PosTag;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_rebases_indices() {
        let first = AnnotatedSentence::new(
            "Hallo.",
            vec![
                Token::new("Hallo", PosTag::Other, 0, 0),
                Token::new(".", PosTag::Punctuation, 1, 0),
            ],
        );
        let second = AnnotatedSentence::new(
            "Kom binnen.",
            vec![
                Token::new("Kom", PosTag::Verb, 0, 0),
                Token::new("binnen", PosTag::Adverb, 1, 0),
                Token::new(".", PosTag::Punctuation, 2, 0),
            ],
        );

        let merged = AnnotatedSentence::merge(vec![first, second]);

        assert_eq!(merged.text, "Hallo. Kom binnen.");
        let indices: Vec<(usize, usize)> = merged
            .tokens
            .iter()
            .map(|t| (t.index, t.head_index))
            .collect();
        assert_eq!(indices, vec![(0, 0), (1, 0), (2, 2), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_merge_of_nothing_is_empty() {
        assert_eq!(AnnotatedSentence::merge(Vec::new()), AnnotatedSentence::default());
    }
}
