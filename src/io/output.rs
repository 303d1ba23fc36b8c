use crate::formatting::FormattingConfig;
use crate::io::writers::{CsvWriter, JsonWriter, TerminalWriter};
use crate::model::{DocumentAnalysis, SentenceAnalysis};
use anyhow::Context;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values
    Csv,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" | "terminal" => Some(Self::Table),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_document(&mut self, analysis: &DocumentAnalysis) -> anyhow::Result<()>;

    /// `detailed` adds the four feature values.
    fn write_sentence(&mut self, analysis: &SentenceAnalysis, detailed: bool)
        -> anyhow::Result<()>;
}

/// Writer for `format`, targeting `output` or stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    formatting: FormattingConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };

    // Files never get ANSI escapes.
    let formatting = if output.is_some() {
        FormattingConfig::plain()
    } else {
        formatting
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Csv => Box::new(CsvWriter::new(sink)),
        OutputFormat::Table => Box::new(TerminalWriter::new(sink, formatting)),
    })
}
