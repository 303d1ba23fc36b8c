use super::{resolve_config, resolve_format, resolve_lexicon, AnnotationInput};
use crate::formatting::FormattingConfig;
use crate::io::{self, OutputFormat};
use crate::model::Document;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub struct ScoreConfig {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub conllu: Option<PathBuf>,
    pub lexicon: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub detailed: bool,
    pub strip_markdown: bool,
    pub config: Option<PathBuf>,
    pub no_parallel: bool,
    pub formatting_config: FormattingConfig,
}

pub fn handle_score(config: ScoreConfig) -> Result<()> {
    let lint_config = resolve_config(config.config.as_deref())?;

    let mut options = lint_config.scoring_options();
    if config.no_parallel {
        options.parallel = false;
    }
    let strip_markdown = config.strip_markdown || lint_config.strip_markdown();

    let input = match (&config.text, &config.file, &config.conllu) {
        (_, _, Some(path)) => AnnotationInput::conllu(path)?,
        (Some(text), _, _) => AnnotationInput::raw(text.clone(), &lint_config, strip_markdown)?,
        (None, Some(path), None) => {
            AnnotationInput::raw(io::read_file(path)?, &lint_config, strip_markdown)?
        }
        (None, None, None) => bail!("Provide text with --text, --file or --conllu"),
    };

    let lexicon = resolve_lexicon(config.lexicon.as_deref(), &lint_config, &options.language)?;

    let document = Document::from_text(&input.text, &*input.pipeline, &lexicon, &options)
        .context("Failed to score document")?;

    let format = resolve_format(config.format, &lint_config);
    let mut writer = io::create_writer(format, config.output.as_deref(), config.formatting_config)?;
    writer.write_document(&document.analysis(config.detailed))?;

    if let Some(path) = &config.output {
        tracing::info!("Report written to {}", path.display());
    }
    Ok(())
}
