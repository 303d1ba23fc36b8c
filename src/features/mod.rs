//! The four LiNT sentence features.
//!
//! Every extractor is a pure function of a sentence's token sequence (plus the
//! frequency database for word frequency). Empty sequences are valid input and
//! yield the documented defaults instead of errors.

pub mod dependency_distance;
pub mod proportions;
pub mod word_frequency;

pub use dependency_distance::{apply_long_dependency_adjustment, max_dependency_distance};
pub use proportions::{concrete_noun_proportion, content_word_density};
pub use word_frequency::{word_frequency_log, UNKNOWN_WORD_FREQ};

use crate::core::Token;
use crate::frequency::FrequencyLookup;
use serde::{Deserialize, Serialize};

/// Language code used for frequency lookups unless configured otherwise.
pub const DEFAULT_LANGUAGE: &str = "nl";

/// Options that influence feature extraction and document construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringOptions {
    pub language: String,
    /// Reduce maximum dependency distances above 3 by 2, as T-Scan does.
    pub long_dependency_adjustment: bool,
    /// Score document sentences on the rayon pool.
    pub parallel: bool,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            long_dependency_adjustment: false,
            parallel: true,
        }
    }
}

/// The feature tuple consumed by the score calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Features {
    /// Mean Zipf frequency of scored words.
    pub freq_log: f64,
    /// Largest head distance among non-punctuation tokens.
    pub max_dep: usize,
    /// Content words (adverbs excluded) over all tokens.
    pub content_density: f64,
    /// Nouns and proper nouns over all tokens.
    pub concrete_prop: f64,
}

impl Features {
    /// Features of a sentence without tokens.
    pub const EMPTY: Features = Features {
        freq_log: UNKNOWN_WORD_FREQ,
        max_dep: 0,
        content_density: 0.0,
        concrete_prop: 0.0,
    };

    pub fn extract(
        tokens: &[Token],
        lookup: &dyn FrequencyLookup,
        options: &ScoringOptions,
    ) -> Self {
        let max_dep = max_dependency_distance(tokens);
        let max_dep = if options.long_dependency_adjustment {
            apply_long_dependency_adjustment(max_dep)
        } else {
            max_dep
        };

        Self {
            freq_log: word_frequency_log(tokens, lookup, &options.language),
            max_dep,
            content_density: content_word_density(tokens),
            concrete_prop: concrete_noun_proportion(tokens),
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PosTag;
    use crate::frequency::FrequencyTable;

    #[test]
    fn test_empty_tokens_yield_empty_features() {
        let table = FrequencyTable::new("nl");
        let features = Features::extract(&[], &table, &ScoringOptions::default());
        assert_eq!(features, Features::EMPTY);
    }

    #[test]
    fn test_adjustment_is_opt_in() {
        let tokens = vec![
            Token::new("Gisteren", PosTag::Adverb, 0, 5),
            Token::new("heeft", PosTag::Other, 1, 5),
            Token::new("de", PosTag::Other, 2, 3),
            Token::new("buurman", PosTag::Noun, 3, 5),
            Token::new("brood", PosTag::Noun, 4, 5),
            Token::new("gekocht", PosTag::Verb, 5, 5),
        ];
        let table = FrequencyTable::new("nl");

        let plain = Features::extract(&tokens, &table, &ScoringOptions::default());
        assert_eq!(plain.max_dep, 5);

        let options = ScoringOptions {
            long_dependency_adjustment: true,
            ..ScoringOptions::default()
        };
        let adjusted = Features::extract(&tokens, &table, &options);
        assert_eq!(adjusted.max_dep, 3);
    }
}
