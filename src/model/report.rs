use super::sentence::Sentence;
use crate::features::Features;
use crate::scoring::DifficultyLevel;
use serde::{Deserialize, Serialize};

/// Serializable document summary, optionally with a per-sentence breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub document_score: f64,
    pub document_level: DifficultyLevel,
    pub document_level_description: String,
    pub sentence_count: usize,
    pub average_sentence_length: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentences: Option<Vec<SentenceAnalysis>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    pub sentence: String,
    pub lint_score: f64,
    pub difficulty_level: DifficultyLevel,
    pub level_description: String,
    pub token_count: usize,
    pub features: Features,
}

impl SentenceAnalysis {
    pub fn from_sentence(sentence: &Sentence) -> Self {
        Self {
            sentence: sentence.text().to_string(),
            lint_score: round2(sentence.score()),
            difficulty_level: sentence.level(),
            level_description: sentence.level().description().to_string(),
            token_count: sentence.token_count(),
            features: *sentence.features(),
        }
    }
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
