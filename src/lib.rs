// Export modules for library usage
pub mod annotation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod features;
pub mod formatting;
pub mod frequency;
pub mod io;
pub mod model;
pub mod observability;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    LintError, PosTag, Result, Token, PARTIAL_PROPER_NAME_MARKER, PROPER_NAME_MARKER,
};

pub use crate::annotation::{
    parse_conllu, strip_markdown, AnnotatedSentence, AnnotationPipeline, CommandPipeline,
    ConlluPipeline,
};

pub use crate::features::{Features, ScoringOptions, UNKNOWN_WORD_FREQ};

pub use crate::frequency::{FrequencyLookup, FrequencyTable};

pub use crate::scoring::{calculate_score, DifficultyLevel};

pub use crate::model::{Document, DocumentAnalysis, Sentence, SentenceAnalysis, SentenceScore};

pub use crate::config::LintConfig;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
