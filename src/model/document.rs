use super::report::{round2, DocumentAnalysis, SentenceAnalysis};
use super::sentence::{empty_sentence_score, Sentence};
use crate::annotation::{AnnotatedSentence, AnnotationPipeline};
use crate::core::Result;
use crate::features::ScoringOptions;
use crate::frequency::FrequencyLookup;
use crate::scoring::DifficultyLevel;
use rayon::prelude::*;
use serde::Serialize;

/// Per-sentence entry of a document breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceScore {
    pub text: String,
    pub score: f64,
    pub level: DifficultyLevel,
}

/// An ordered sequence of scored sentences with an aggregate score.
///
/// The document score is the unweighted mean of the sentence scores; the
/// document level is looked up from that mean, not averaged from the
/// sentence levels.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    sentences: Vec<Sentence>,
    score: f64,
    level: DifficultyLevel,
}

impl Document {
    /// Segment and annotate `text` through `pipeline`, then score every sentence.
    ///
    /// Blank input never reaches the pipeline and yields an empty document.
    pub fn from_text(
        text: &str,
        pipeline: &dyn AnnotationPipeline,
        lookup: &dyn FrequencyLookup,
        options: &ScoringOptions,
    ) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::from_sentences(Vec::new()));
        }
        let annotated = pipeline.annotate(text)?;
        Self::from_annotated(annotated, lookup, options)
    }

    pub fn from_annotated(
        annotated: Vec<AnnotatedSentence>,
        lookup: &dyn FrequencyLookup,
        options: &ScoringOptions,
    ) -> Result<Self> {
        let sentences: Vec<Sentence> = if options.parallel {
            annotated
                .into_par_iter()
                .map(|sentence| Sentence::from_annotated(sentence, lookup, options))
                .collect::<Result<_>>()?
        } else {
            annotated
                .into_iter()
                .map(|sentence| Sentence::from_annotated(sentence, lookup, options))
                .collect::<Result<_>>()?
        };

        let document = Self::from_sentences(sentences);
        tracing::info!(
            sentences = document.sentence_count(),
            score = document.score,
            level = document.level.as_u8(),
            "Scored document"
        );
        Ok(document)
    }

    pub fn from_sentences(sentences: Vec<Sentence>) -> Self {
        let scores: Vec<f64> = sentences.iter().map(Sentence::score).collect();
        let score = aggregate_score(&scores);
        let level = if sentences.is_empty() {
            DifficultyLevel::VeryDifficult
        } else {
            DifficultyLevel::from_score(score)
        };

        Self {
            sentences,
            score,
            level,
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn sentence_scores(&self) -> Vec<SentenceScore> {
        self.sentences
            .iter()
            .map(|sentence| SentenceScore {
                text: sentence.text().to_string(),
                score: sentence.score(),
                level: sentence.level(),
            })
            .collect()
    }

    /// Mean token count per sentence; 0 for an empty document.
    pub fn average_sentence_length(&self) -> f64 {
        if self.sentences.is_empty() {
            return 0.0;
        }
        let tokens: usize = self.sentences.iter().map(Sentence::token_count).sum();
        tokens as f64 / self.sentences.len() as f64
    }

    /// Report view with scores rounded to two decimals.
    pub fn analysis(&self, detailed: bool) -> DocumentAnalysis {
        DocumentAnalysis {
            document_score: round2(self.score),
            document_level: self.level,
            document_level_description: self.level.description().to_string(),
            sentence_count: self.sentence_count(),
            average_sentence_length: round2(self.average_sentence_length()),
            sentences: detailed.then(|| {
                self.sentences
                    .iter()
                    .map(SentenceAnalysis::from_sentence)
                    .collect()
            }),
        }
    }
}

/// Arithmetic mean of sentence scores.
///
/// Without sentences the result is the empty-sentence score, keeping the
/// aggregation total.
pub fn aggregate_score(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return empty_sentence_score();
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}
