//! Sentence and document models.

pub mod document;
pub mod report;
pub mod sentence;

pub use document::{aggregate_score, Document, SentenceScore};
pub use report::{round2, DocumentAnalysis, SentenceAnalysis};
pub use sentence::{empty_sentence_score, Sentence};
