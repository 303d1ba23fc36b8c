use super::{resolve_config, resolve_format, resolve_lexicon, AnnotationInput};
use crate::annotation::{AnnotatedSentence, AnnotationPipeline};
use crate::formatting::FormattingConfig;
use crate::io::{self, OutputFormat};
use crate::model::{Sentence, SentenceAnalysis};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub struct SentenceConfig {
    pub text: Option<String>,
    pub conllu: Option<PathBuf>,
    pub lexicon: Option<PathBuf>,
    pub detailed: bool,
    pub format: Option<OutputFormat>,
    pub config: Option<PathBuf>,
    pub formatting_config: FormattingConfig,
}

pub fn handle_sentence(config: SentenceConfig) -> Result<()> {
    let lint_config = resolve_config(config.config.as_deref())?;
    let options = lint_config.scoring_options();

    let input = match (&config.text, &config.conllu) {
        (_, Some(path)) => AnnotationInput::conllu(path)?,
        (Some(text), None) => {
            AnnotationInput::raw(text.clone(), &lint_config, lint_config.strip_markdown())?
        }
        (None, None) => bail!("Provide a sentence or --conllu"),
    };

    let lexicon = resolve_lexicon(config.lexicon.as_deref(), &lint_config, &options.language)?;

    let sentence = if input.text.trim().is_empty() {
        Sentence::empty(input.text.trim())
    } else {
        let annotated = input
            .pipeline
            .annotate(&input.text)
            .context("Failed to annotate sentence")?;
        if annotated.len() > 1 {
            tracing::debug!(
                "Annotator split the input into {} sentences; merging",
                annotated.len()
            );
        }
        Sentence::from_annotated(AnnotatedSentence::merge(annotated), &lexicon, &options)
            .context("Failed to score sentence")?
    };

    let format = resolve_format(config.format, &lint_config);
    let mut writer = io::create_writer(format, None, config.formatting_config)?;
    writer.write_sentence(&SentenceAnalysis::from_sentence(&sentence), config.detailed)?;
    Ok(())
}
