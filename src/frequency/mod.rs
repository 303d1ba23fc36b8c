//! Lexical frequency lookup.
//!
//! The frequency database is an external collaborator; the scoring core only
//! sees the [`FrequencyLookup`] capability.

pub mod table;

pub use table::FrequencyTable;

/// Query interface over a Zipf-scale word frequency database.
pub trait FrequencyLookup: Send + Sync {
    /// Zipf frequency of `word` in `language`, or `None` when the database has no entry.
    fn zipf_frequency(&self, word: &str, language: &str) -> Option<f64>;
}

impl<T: FrequencyLookup + ?Sized> FrequencyLookup for &T {
    fn zipf_frequency(&self, word: &str, language: &str) -> Option<f64> {
        (**self).zipf_frequency(word, language)
    }
}

impl<T: FrequencyLookup + ?Sized> FrequencyLookup for Box<T> {
    fn zipf_frequency(&self, word: &str, language: &str) -> Option<f64> {
        (**self).zipf_frequency(word, language)
    }
}
