//! Annotated-token view over external annotation output.
//!
//! The annotation pipeline (tokenizer, tagger, dependency parser) lives outside
//! this crate. Adapters translate its output into [`Token`] values so that the
//! feature extractors never see pipeline-specific tag vocabularies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sub-tag marking a token as (part of) a proper name in the Dutch tag set.
pub const PROPER_NAME_MARKER: &str = "eigen";

/// `SPEC` sub-tag for a fragment of a multi-word proper name (`New` in `New York`).
pub const PARTIAL_PROPER_NAME_MARKER: &str = "deeleigen";

/// `SPEC` sub-tag for symbols.
const SYMBOL_MARKER: &str = "symb";

/// Coarse grammatical category of a token.
///
/// This is a closed set; anything an adapter cannot map lands in [`PosTag::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Numeral,
    Symbol,
    Punctuation,
    Other,
}

impl PosTag {
    /// Map a Universal Dependencies UPOS tag.
    pub fn from_upos(tag: &str) -> Self {
        match tag {
            "NOUN" => Self::Noun,
            "PROPN" => Self::ProperNoun,
            "VERB" => Self::Verb,
            "ADJ" => Self::Adjective,
            "ADV" => Self::Adverb,
            "NUM" => Self::Numeral,
            "SYM" => Self::Symbol,
            "PUNCT" => Self::Punctuation,
            _ => Self::Other,
        }
    }

    /// Map the head segment of a Lassy/CGN fine-grained tag (`N|soort|ev|...`).
    ///
    /// `N|eigen` and `SPEC|deeleigen` are proper nouns, `SPEC|symb` is a symbol.
    /// Other `SPEC` kinds (foreign words, truncations) map to [`PosTag::Other`].
    pub fn from_lassy(head: &str, sub_tags: &[String]) -> Self {
        let kind = sub_tags.first().map(String::as_str);
        match (head, kind) {
            ("N", Some(PROPER_NAME_MARKER)) => Self::ProperNoun,
            ("N", _) => Self::Noun,
            ("SPEC", Some(PARTIAL_PROPER_NAME_MARKER)) => Self::ProperNoun,
            ("SPEC", Some(SYMBOL_MARKER)) => Self::Symbol,
            _ => Self::from_lassy_head(head),
        }
    }

    fn from_lassy_head(head: &str) -> Self {
        match head {
            "WW" => Self::Verb,
            "ADJ" => Self::Adjective,
            "BW" => Self::Adverb,
            "TW" => Self::Numeral,
            "LET" => Self::Punctuation,
            _ => Self::Other,
        }
    }

    pub fn is_punctuation(self) -> bool {
        matches!(self, Self::Punctuation)
    }

    /// Categories whose word frequency feeds the frequency feature.
    pub fn is_frequency_scored(self) -> bool {
        matches!(self, Self::Noun | Self::Adjective | Self::Verb | Self::Adverb)
    }

    /// Content words, adverbs excluded.
    pub fn is_content_word(self) -> bool {
        matches!(
            self,
            Self::Noun
                | Self::ProperNoun
                | Self::Verb
                | Self::Adjective
                | Self::Numeral
                | Self::Symbol
        )
    }

    /// Nouns counted by the concreteness proxy.
    pub fn is_noun(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Noun => "NOUN",
            Self::ProperNoun => "PROPER_NOUN",
            Self::Verb => "VERB",
            Self::Adjective => "ADJECTIVE",
            Self::Adverb => "ADVERB",
            Self::Numeral => "NUMERAL",
            Self::Symbol => "SYMBOL",
            Self::Punctuation => "PUNCTUATION",
            Self::Other => "OTHER",
        };
        f.write_str(name)
    }
}

/// One word or punctuation unit of an annotated sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PosTag,
    #[serde(default)]
    pub sub_tags: Vec<String>,
    /// Zero-based position within the sentence.
    pub index: usize,
    /// Index of the syntactic head; equal to `index` for the root.
    pub head_index: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: PosTag, index: usize, head_index: usize) -> Self {
        let text = text.into();
        Self {
            lemma: text.clone(),
            text,
            pos,
            sub_tags: Vec::new(),
            index,
            head_index,
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    pub fn with_sub_tags<I, S>(mut self, sub_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_tags = sub_tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_root(&self) -> bool {
        self.head_index == self.index
    }

    pub fn is_proper_name(&self) -> bool {
        self.sub_tags
            .iter()
            .any(|tag| tag == PROPER_NAME_MARKER || tag == PARTIAL_PROPER_NAME_MARKER)
    }

    /// Absolute distance to the syntactic head.
    pub fn dependency_distance(&self) -> usize {
        self.head_index.abs_diff(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upos_mapping_falls_back_to_other() {
        assert_eq!(PosTag::from_upos("PROPN"), PosTag::ProperNoun);
        assert_eq!(PosTag::from_upos("PUNCT"), PosTag::Punctuation);
        assert_eq!(PosTag::from_upos("AUX"), PosTag::Other);
        assert_eq!(PosTag::from_upos("DET"), PosTag::Other);
        assert_eq!(PosTag::from_upos(""), PosTag::Other);
    }

    #[test]
    fn test_lassy_mapping_detects_proper_nouns() {
        let eigen = vec!["eigen".to_string(), "ev".to_string()];
        let soort = vec!["soort".to_string(), "ev".to_string()];
        assert_eq!(PosTag::from_lassy("N", &eigen), PosTag::ProperNoun);
        assert_eq!(PosTag::from_lassy("N", &soort), PosTag::Noun);
        assert_eq!(PosTag::from_lassy("WW", &[]), PosTag::Verb);
        assert_eq!(PosTag::from_lassy("LID", &[]), PosTag::Other);
    }

    #[test]
    fn test_lassy_spec_kinds() {
        let tags = |kind: &str| vec![kind.to_string()];
        assert_eq!(PosTag::from_lassy("SPEC", &tags("deeleigen")), PosTag::ProperNoun);
        assert_eq!(PosTag::from_lassy("SPEC", &tags("symb")), PosTag::Symbol);
        assert_eq!(PosTag::from_lassy("SPEC", &tags("vreemd")), PosTag::Other);
        assert_eq!(PosTag::from_lassy("SPEC", &tags("afgebr")), PosTag::Other);
        assert_eq!(PosTag::from_lassy("SPEC", &[]), PosTag::Other);
        assert!(PosTag::from_lassy("SPEC", &tags("deeleigen")).is_noun());
    }

    #[test]
    fn test_partial_proper_name_is_proper_name() {
        let token = Token::new("York", PosTag::ProperNoun, 0, 0).with_sub_tags(["deeleigen"]);
        assert!(token.is_proper_name());

        let token = Token::new("ok", PosTag::Other, 0, 0).with_sub_tags(["vreemd"]);
        assert!(!token.is_proper_name());
    }

    #[test]
    fn test_proper_name_marker_anywhere_in_sub_tags() {
        let token = Token::new("Jan", PosTag::Noun, 0, 0).with_sub_tags(["zijd", "eigen"]);
        assert!(token.is_proper_name());

        let token = Token::new("kat", PosTag::Noun, 0, 0).with_sub_tags(["soort", "ev"]);
        assert!(!token.is_proper_name());
    }

    #[test]
    fn test_dependency_distance_is_symmetric() {
        assert_eq!(Token::new("a", PosTag::Other, 1, 4).dependency_distance(), 3);
        assert_eq!(Token::new("a", PosTag::Other, 4, 1).dependency_distance(), 3);
        assert!(Token::new("a", PosTag::Verb, 2, 2).is_root());
    }

    #[test]
    fn test_pos_sets() {
        assert!(PosTag::Adverb.is_frequency_scored());
        assert!(!PosTag::Adverb.is_content_word());
        assert!(PosTag::Symbol.is_content_word());
        assert!(!PosTag::ProperNoun.is_frequency_scored());
        assert!(PosTag::ProperNoun.is_noun());
    }
}
