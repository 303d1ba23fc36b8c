use crate::core::Token;
use crate::frequency::FrequencyLookup;

/// Zipf frequency substituted for words the database does not know.
/// Attested floor for out-of-vocabulary Dutch words.
pub const UNKNOWN_WORD_FREQ: f64 = 1.3555;

/// Mean Zipf frequency over nouns, adjectives, verbs and adverbs.
///
/// Tokens carrying the proper-name sub-tag are excluded from the mean, as are
/// tokens outside those categories. When no token qualifies the result is
/// [`UNKNOWN_WORD_FREQ`].
pub fn word_frequency_log(tokens: &[Token], lookup: &dyn FrequencyLookup, language: &str) -> f64 {
    let (sum, count) = tokens
        .iter()
        .filter(|token| token.pos.is_frequency_scored() && !token.is_proper_name())
        .map(|token| token_frequency(token, lookup, language))
        .fold((0.0_f64, 0_usize), |(sum, count), freq| (sum + freq, count + 1));

    if count == 0 {
        UNKNOWN_WORD_FREQ
    } else {
        sum / count as f64
    }
}

fn token_frequency(token: &Token, lookup: &dyn FrequencyLookup, language: &str) -> f64 {
    lookup
        .zipf_frequency(&token.text, language)
        .filter(|freq| freq.is_finite() && *freq > 0.0)
        .unwrap_or(UNKNOWN_WORD_FREQ)
}
