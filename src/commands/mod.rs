//! CLI command implementations.
//!
//! - **score**: score a document and write its readability report
//! - **sentence**: score a single sentence
//! - **init**: write a default `.alletaal-lint.toml`

pub mod init;
pub mod score;
pub mod sentence;

pub use init::init_config;
pub use score::{handle_score, ScoreConfig};
pub use sentence::{handle_sentence, SentenceConfig};

use crate::annotation::{AnnotationPipeline, CommandPipeline, ConlluPipeline};
use crate::config::{self, LintConfig};
use crate::frequency::FrequencyTable;
use crate::io::OutputFormat;
use anyhow::{Context, Result};
use std::path::Path;

/// Explicit `--config` file, or discovery from the working directory.
pub(crate) fn resolve_config(explicit: Option<&Path>) -> Result<LintConfig> {
    match explicit {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Invalid configuration file {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Lexicon from the flag, then the config; an empty table when neither is set.
pub(crate) fn resolve_lexicon(
    flag: Option<&Path>,
    config: &LintConfig,
    language: &str,
) -> Result<FrequencyTable> {
    let configured = config.lexicon_path();
    match flag.or(configured.as_deref()) {
        Some(path) => FrequencyTable::load(path, language)
            .with_context(|| format!("Failed to load lexicon {}", path.display())),
        None => {
            tracing::warn!(
                "No frequency lexicon configured; every word scores as unknown ({})",
                crate::features::UNKNOWN_WORD_FREQ
            );
            Ok(FrequencyTable::new(language))
        }
    }
}

/// Annotator for raw text, taken from the `[pipeline]` section.
pub(crate) fn resolve_pipeline(config: &LintConfig) -> Result<Box<dyn AnnotationPipeline>> {
    let pipeline = config.pipeline.as_ref().with_context(|| {
        format!(
            "Scoring raw text needs an annotator: add a [pipeline] section to {} or pass --conllu",
            config::CONFIG_FILE_NAME
        )
    })?;
    let command = CommandPipeline::new(&pipeline.command, pipeline.args.clone())
        .context("Failed to set up the annotation pipeline")?;
    tracing::debug!("Using annotator {}", command.program().display());
    Ok(Box::new(command))
}

/// Input text plus the pipeline that understands it.
pub(crate) struct AnnotationInput {
    pub text: String,
    pub pipeline: Box<dyn AnnotationPipeline>,
}

impl AnnotationInput {
    pub(crate) fn conllu(path: &Path) -> Result<Self> {
        Ok(Self {
            text: crate::io::read_file(path)?,
            pipeline: Box::new(ConlluPipeline),
        })
    }

    pub(crate) fn raw(text: String, config: &LintConfig, strip_markdown: bool) -> Result<Self> {
        let text = if strip_markdown {
            crate::annotation::strip_markdown(&text)
        } else {
            text
        };
        // Blank text never reaches the annotator, so none is needed.
        let pipeline: Box<dyn AnnotationPipeline> = if text.trim().is_empty() {
            Box::new(ConlluPipeline)
        } else {
            resolve_pipeline(config)?
        };
        Ok(Self { text, pipeline })
    }
}

/// Flag, then config, then the terminal table.
pub(crate) fn resolve_format(flag: Option<OutputFormat>, config: &LintConfig) -> OutputFormat {
    flag.or_else(|| {
        config.default_format().and_then(|name| {
            let parsed = OutputFormat::parse(&name);
            if parsed.is_none() {
                tracing::warn!("Unknown output format {name:?} in config; using table");
            }
            parsed
        })
    })
    .unwrap_or(OutputFormat::Table)
}
