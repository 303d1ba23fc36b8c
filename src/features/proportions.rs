use crate::core::{PosTag, Token};

/// Share of content words (adverbs excluded) among all tokens, punctuation included.
pub fn content_word_density(tokens: &[Token]) -> f64 {
    proportion(tokens, PosTag::is_content_word)
}

/// Share of nouns and proper nouns among all tokens.
///
/// A part-of-speech proxy for concreteness: no concreteness lexicon is consulted,
/// so abstract nouns count the same as concrete ones.
pub fn concrete_noun_proportion(tokens: &[Token]) -> f64 {
    proportion(tokens, PosTag::is_noun)
}

fn proportion(tokens: &[Token], predicate: impl Fn(PosTag) -> bool) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let matching = tokens.iter().filter(|token| predicate(token.pos)).count();
    matching as f64 / tokens.len() as f64
}
