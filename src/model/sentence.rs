use crate::annotation::AnnotatedSentence;
use crate::core::{LintError, Result, Token};
use crate::features::{Features, ScoringOptions};
use crate::frequency::FrequencyLookup;
use crate::scoring::{clamp_score, raw_formula, score_features, DifficultyLevel};

/// One scored sentence.
///
/// Features, score and level are computed once at construction and stored as
/// plain fields. The token sequence is never mutated afterwards, so instances
/// can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    text: String,
    tokens: Vec<Token>,
    features: Features,
    score: f64,
    level: DifficultyLevel,
}

impl Sentence {
    /// Build and score a sentence.
    ///
    /// Fails with [`LintError::DataIntegrity`] when a token's index does not
    /// match its position or its head index points outside the sentence.
    pub fn new(
        text: impl Into<String>,
        tokens: Vec<Token>,
        lookup: &dyn FrequencyLookup,
        options: &ScoringOptions,
    ) -> Result<Self> {
        let text = text.into();
        validate_tokens(&text, &tokens)?;

        let features = Features::extract(&tokens, lookup, options);
        let score = score_features(&features)?;
        let level = DifficultyLevel::from_score(score);

        tracing::debug!(
            tokens = tokens.len(),
            freq_log = features.freq_log,
            max_dep = features.max_dep,
            score,
            "Scored sentence"
        );

        Ok(Self {
            text,
            tokens,
            features,
            score,
            level,
        })
    }

    pub fn from_annotated(
        annotated: AnnotatedSentence,
        lookup: &dyn FrequencyLookup,
        options: &ScoringOptions,
    ) -> Result<Self> {
        Self::new(annotated.text, annotated.tokens, lookup, options)
    }

    /// A sentence without tokens; scored from [`Features::EMPTY`].
    pub fn empty(text: impl Into<String>) -> Self {
        let score = empty_sentence_score();
        Self {
            text: text.into(),
            tokens: Vec::new(),
            features: Features::EMPTY,
            score,
            level: DifficultyLevel::from_score(score),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn level(&self) -> DifficultyLevel {
        self.level
    }
}

/// Score of a sentence with no tokens.
pub fn empty_sentence_score() -> f64 {
    let features = Features::EMPTY;
    clamp_score(raw_formula(
        features.freq_log,
        features.max_dep as f64,
        features.content_density,
        features.concrete_prop,
    ))
}

fn validate_tokens(text: &str, tokens: &[Token]) -> Result<()> {
    for (position, token) in tokens.iter().enumerate() {
        if token.index != position {
            return Err(LintError::data_integrity(
                text,
                format!(
                    "token {:?} at position {position} has index {}",
                    token.text, token.index
                ),
            ));
        }
        if token.head_index >= tokens.len() {
            return Err(LintError::data_integrity(
                text,
                format!(
                    "token {:?} has head index {} outside sentence of {} tokens",
                    token.text,
                    token.head_index,
                    tokens.len()
                ),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PosTag;
    use crate::features::UNKNOWN_WORD_FREQ;
    use crate::frequency::FrequencyTable;

    fn kat_sentence() -> Vec<Token> {
        vec![
            Token::new("De", PosTag::Other, 0, 1),
            Token::new("kat", PosTag::Noun, 1, 2),
            Token::new("zit", PosTag::Verb, 2, 2),
            Token::new("op", PosTag::Other, 3, 5),
            Token::new("de", PosTag::Other, 4, 5),
            Token::new("mat", PosTag::Noun, 5, 3),
            Token::new(".", PosTag::Punctuation, 6, 2),
        ]
    }

    fn lexicon() -> FrequencyTable {
        FrequencyTable::from_entries("nl", [("kat", 4.62), ("zit", 5.01), ("mat", 3.85)])
    }

    #[test]
    fn test_kat_sentence_features() {
        let sentence = Sentence::new(
            "De kat zit op de mat.",
            kat_sentence(),
            &lexicon(),
            &ScoringOptions::default(),
        )
        .unwrap();

        let features = sentence.features();
        assert_eq!(features.content_density, 3.0 / 7.0);
        assert_eq!(features.concrete_prop, 2.0 / 7.0);
        assert_eq!(features.max_dep, 2);
        assert!((features.freq_log - (4.62 + 5.01 + 3.85) / 3.0).abs() < 1e-12);
        assert!((0.0..=100.0).contains(&sentence.score()));
        assert_eq!(sentence.level(), DifficultyLevel::from_score(sentence.score()));
    }

    #[test]
    fn test_single_punctuation_sentence() {
        let tokens = vec![Token::new(".", PosTag::Punctuation, 0, 0)];
        let sentence =
            Sentence::new(".", tokens, &lexicon(), &ScoringOptions::default()).unwrap();

        assert_eq!(sentence.features().max_dep, 0);
        assert_eq!(sentence.features().content_density, 0.0);
        assert_eq!(sentence.features().concrete_prop, 0.0);
        assert_eq!(sentence.features().freq_log, UNKNOWN_WORD_FREQ);
        assert_eq!(sentence.score(), empty_sentence_score());
    }

    #[test]
    fn test_empty_token_sequence_is_not_an_error() {
        let sentence = Sentence::new("", Vec::new(), &lexicon(), &ScoringOptions::default())
            .unwrap();
        assert_eq!(sentence, Sentence::empty(""));
        assert_eq!(*sentence.features(), Features::EMPTY);
        assert_eq!(sentence.score(), empty_sentence_score());
    }

    #[test]
    fn test_head_index_out_of_range() {
        let mut tokens = kat_sentence();
        tokens[3].head_index = 7;
        let err = Sentence::new(
            "De kat zit op de mat.",
            tokens,
            &lexicon(),
            &ScoringOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LintError::DataIntegrity { .. }));
    }

    #[test]
    fn test_index_must_match_position() {
        let tokens = vec![
            Token::new("Ja", PosTag::Other, 0, 0),
            Token::new("!", PosTag::Punctuation, 0, 0),
        ];
        let err = Sentence::new("Ja!", tokens, &lexicon(), &ScoringOptions::default()).unwrap_err();
        assert!(matches!(err, LintError::DataIntegrity { .. }));
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let build = || {
            Sentence::new(
                "De kat zit op de mat.",
                kat_sentence(),
                &lexicon(),
                &ScoringOptions::default(),
            )
            .unwrap()
        };
        let a = build();
        let b = build();
        assert_eq!(a.features(), b.features());
        assert_eq!(a.score().to_bits(), b.score().to_bits());
    }
}
