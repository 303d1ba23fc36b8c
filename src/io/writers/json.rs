use crate::io::output::OutputWriter;
use crate::model::{DocumentAnalysis, SentenceAnalysis};
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct SentenceSummary<'a> {
    sentence: &'a str,
    lint_score: f64,
    difficulty_level: u8,
    level_description: &'a str,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_document(&mut self, analysis: &DocumentAnalysis) -> anyhow::Result<()> {
        self.write_json(analysis)
    }

    fn write_sentence(
        &mut self,
        analysis: &SentenceAnalysis,
        detailed: bool,
    ) -> anyhow::Result<()> {
        if detailed {
            return self.write_json(analysis);
        }
        self.write_json(&SentenceSummary {
            sentence: &analysis.sentence,
            lint_score: analysis.lint_score,
            difficulty_level: analysis.difficulty_level.as_u8(),
            level_description: &analysis.level_description,
        })
    }
}
