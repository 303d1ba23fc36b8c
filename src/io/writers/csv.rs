use crate::io::output::OutputWriter;
use crate::model::{DocumentAnalysis, SentenceAnalysis};
use std::io::Write;

/// RFC 4180 style CSV: a summary row, or one row per sentence when the
/// analysis carries a sentence breakdown.
pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_record<I, S>(&mut self, fields: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = fields
            .into_iter()
            .map(|field| escape_field(field.as_ref()))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

fn escape_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_document(&mut self, analysis: &DocumentAnalysis) -> anyhow::Result<()> {
        match &analysis.sentences {
            Some(sentences) => {
                self.write_record(["sentence", "score", "level", "level_description"])?;
                for sentence in sentences {
                    self.write_record([
                        sentence.sentence.clone(),
                        sentence.lint_score.to_string(),
                        sentence.difficulty_level.as_u8().to_string(),
                        sentence.level_description.clone(),
                    ])?;
                }
            }
            None => {
                self.write_record([
                    "document_score",
                    "document_level",
                    "document_level_description",
                    "sentence_count",
                    "average_sentence_length",
                ])?;
                self.write_record([
                    analysis.document_score.to_string(),
                    analysis.document_level.as_u8().to_string(),
                    analysis.document_level_description.clone(),
                    analysis.sentence_count.to_string(),
                    analysis.average_sentence_length.to_string(),
                ])?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_sentence(
        &mut self,
        analysis: &SentenceAnalysis,
        detailed: bool,
    ) -> anyhow::Result<()> {
        let mut header = vec!["sentence", "score", "level", "level_description"];
        let mut row = vec![
            analysis.sentence.clone(),
            analysis.lint_score.to_string(),
            analysis.difficulty_level.as_u8().to_string(),
            analysis.level_description.clone(),
        ];
        if detailed {
            header.extend([
                "word_frequency_log",
                "max_dependency_length",
                "content_words_proportion",
                "concrete_nouns_proportion",
            ]);
            row.extend([
                format!("{:.3}", analysis.features.freq_log),
                analysis.features.max_dep.to_string(),
                format!("{:.3}", analysis.features.content_density),
                format!("{:.3}", analysis.features.concrete_prop),
            ]);
        }
        self.write_record(header)?;
        self.write_record(row)?;
        self.writer.flush()?;
        Ok(())
    }
}
