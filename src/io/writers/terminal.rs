use crate::formatting::{level_color, truncate_text, FormattingConfig};
use crate::io::output::OutputWriter;
use crate::model::{DocumentAnalysis, SentenceAnalysis};
use crate::scoring::DifficultyLevel;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use std::io::Write;

const MAX_SENTENCE_WIDTH: usize = 60;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        formatting.apply();
        Self { writer, formatting }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if self.formatting.color.should_use_color() {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table
    }

    fn write_title(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold())?;
        Ok(())
    }
}

fn level_cell(level: DifficultyLevel, text: String) -> Cell {
    Cell::new(text).fg(table_color(level))
}

fn table_color(level: DifficultyLevel) -> Color {
    match level_color(level) {
        colored::Color::Red => Color::Red,
        colored::Color::Yellow => Color::Yellow,
        colored::Color::Green => Color::Green,
        colored::Color::TrueColor { r, g, b } => Color::Rgb { r, g, b },
        _ => Color::Reset,
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_document(&mut self, analysis: &DocumentAnalysis) -> anyhow::Result<()> {
        self.write_title("Document Readability Summary")?;

        let mut summary = self.table();
        summary.set_header(vec!["Metric", "Value"]);
        summary.add_row(vec![
            Cell::new("LiNT Score"),
            Cell::new(format!("{:.2}", analysis.document_score)),
        ]);
        summary.add_row(vec![
            Cell::new("Difficulty Level"),
            level_cell(analysis.document_level, analysis.document_level.to_string()),
        ]);
        summary.add_row(vec![
            Cell::new("Sentences"),
            Cell::new(analysis.sentence_count),
        ]);
        summary.add_row(vec![
            Cell::new("Avg. Sentence Length"),
            Cell::new(format!("{:.1} tokens", analysis.average_sentence_length)),
        ]);
        writeln!(self.writer, "{summary}")?;

        if let Some(sentences) = &analysis.sentences {
            writeln!(self.writer)?;
            self.write_title("Sentence Analysis")?;

            let mut table = self.table();
            table.set_header(vec!["Sentence", "Score", "Level"]);
            for sentence in sentences {
                table.add_row(vec![
                    Cell::new(truncate_text(&sentence.sentence, MAX_SENTENCE_WIDTH)),
                    Cell::new(format!("{:.2}", sentence.lint_score))
                        .set_alignment(CellAlignment::Center),
                    level_cell(
                        sentence.difficulty_level,
                        sentence.difficulty_level.as_u8().to_string(),
                    )
                    .set_alignment(CellAlignment::Center),
                ]);
            }
            writeln!(self.writer, "{table}")?;
        }

        self.writer.flush()?;
        Ok(())
    }

    fn write_sentence(
        &mut self,
        analysis: &SentenceAnalysis,
        detailed: bool,
    ) -> anyhow::Result<()> {
        self.write_title("Sentence Readability Analysis")?;

        let mut table = self.table();
        table.add_row(vec![Cell::new("Sentence"), Cell::new(&analysis.sentence)]);
        table.add_row(vec![
            Cell::new("LiNT Score"),
            Cell::new(format!("{:.2}", analysis.lint_score)),
        ]);
        table.add_row(vec![
            Cell::new("Difficulty Level"),
            level_cell(
                analysis.difficulty_level,
                analysis.difficulty_level.to_string(),
            ),
        ]);
        writeln!(self.writer, "{table}")?;

        if detailed {
            writeln!(self.writer)?;
            self.write_title("Detailed Metrics")?;

            let features = &analysis.features;
            let mut metrics = self.table();
            metrics.set_header(vec!["Metric", "Value"]);
            metrics.add_row(vec![
                Cell::new("Word Frequency (log)"),
                Cell::new(format!("{:.3}", features.freq_log)),
            ]);
            metrics.add_row(vec![
                Cell::new("Max Dependency Length"),
                Cell::new(features.max_dep),
            ]);
            metrics.add_row(vec![
                Cell::new("Content Words Proportion"),
                Cell::new(format!("{:.3}", features.content_density)),
            ]);
            metrics.add_row(vec![
                Cell::new("Concrete Nouns Proportion"),
                Cell::new(format!("{:.3}", features.concrete_prop)),
            ]);
            metrics.add_row(vec![
                Cell::new("Tokens"),
                Cell::new(analysis.token_count),
            ]);
            writeln!(self.writer, "{metrics}")?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
