//! CoNLL-U adapter.
//!
//! CoNLL-U is the exchange format of most dependency parsers (UDPipe, Stanza,
//! spaCy via converters). Each token line carries ten tab-separated columns:
//!
//! ```text
//! ID  FORM  LEMMA  UPOS  XPOS  FEATS  HEAD  DEPREL  DEPS  MISC
//! ```
//!
//! Sentences are separated by blank lines; `#` lines are comments, of which
//! `# text = ...` is used as the sentence text.

use super::AnnotatedSentence;
use crate::core::{LintError, PosTag, Result, Token};

const COLUMN_COUNT: usize = 10;
const EMPTY_FIELD: &str = "_";
const TEXT_COMMENT: &str = "text =";

/// Parse a CoNLL-U document into annotated sentences.
pub fn parse_conllu(input: &str) -> Result<Vec<AnnotatedSentence>> {
    let mut sentences = Vec::new();
    let mut builder = SentenceBuilder::default();

    for (line_no, raw_line) in input.lines().enumerate() {
        let line_no = line_no + 1;
        let line = raw_line.trim_end_matches('\r');

        if line.trim().is_empty() {
            builder.finish_into(&mut sentences);
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            if let Some(text) = comment.trim_start().strip_prefix(TEXT_COMMENT) {
                builder.text = Some(text.trim().to_string());
            }
            continue;
        }

        builder.push_line(line, line_no)?;
    }

    builder.finish_into(&mut sentences);
    tracing::debug!(sentences = sentences.len(), "Parsed CoNLL-U input");
    Ok(sentences)
}

#[derive(Default)]
struct SentenceBuilder {
    text: Option<String>,
    tokens: Vec<Token>,
    rebuilt_text: String,
}

impl SentenceBuilder {
    fn push_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != COLUMN_COUNT {
            return Err(LintError::annotation(
                line_no,
                format!("expected {COLUMN_COUNT} columns, found {}", columns.len()),
            ));
        }

        let id = columns[0];
        // Multi-word token ranges and empty nodes carry no syntactic head of their own.
        if id.contains('-') || id.contains('.') {
            return Ok(());
        }

        let expected_id = self.tokens.len() + 1;
        let id: usize = id
            .parse()
            .map_err(|_| LintError::annotation(line_no, format!("invalid token id {id:?}")))?;
        if id != expected_id {
            return Err(LintError::annotation(
                line_no,
                format!("expected token id {expected_id}, found {id}"),
            ));
        }

        let index = id - 1;
        let form = columns[1];
        let lemma = match columns[2] {
            EMPTY_FIELD => form,
            lemma => lemma,
        };
        let (pos, sub_tags) = map_tags(columns[3], columns[4]);
        let head_index = parse_head(columns[6], index, line_no)?;

        self.append_text(form, columns[9]);
        self.tokens.push(
            Token::new(form, pos, index, head_index)
                .with_lemma(lemma)
                .with_sub_tags(sub_tags),
        );
        Ok(())
    }

    fn append_text(&mut self, form: &str, misc: &str) {
        self.rebuilt_text.push_str(form);
        if !misc.split('|').any(|entry| entry == "SpaceAfter=No") {
            self.rebuilt_text.push(' ');
        }
    }

    fn finish_into(&mut self, sentences: &mut Vec<AnnotatedSentence>) {
        let builder = std::mem::take(self);
        if builder.tokens.is_empty() {
            return;
        }
        let text = builder
            .text
            .unwrap_or_else(|| builder.rebuilt_text.trim_end().to_string());
        sentences.push(AnnotatedSentence::new(text, builder.tokens));
    }
}

/// HEAD is 1-based with 0 for the root. A missing head (`_`) is treated as a root.
fn parse_head(head: &str, index: usize, line_no: usize) -> Result<usize> {
    if head == EMPTY_FIELD {
        return Ok(index);
    }
    match head.parse::<usize>() {
        Ok(0) => Ok(index),
        Ok(head) => Ok(head - 1),
        Err(_) => Err(LintError::annotation(
            line_no,
            format!("invalid head {head:?}"),
        )),
    }
}

/// Map UPOS (preferred) or the Lassy XPOS head segment into the closed tag set.
///
/// Segments after the first `|` of XPOS become the token's sub-tags.
fn map_tags(upos: &str, xpos: &str) -> (PosTag, Vec<String>) {
    let mut segments = xpos.split('|');
    let head = segments.next().unwrap_or(EMPTY_FIELD);
    let sub_tags: Vec<String> = if xpos == EMPTY_FIELD {
        Vec::new()
    } else {
        segments.map(str::to_string).collect()
    };

    let pos = if upos == EMPTY_FIELD {
        PosTag::from_lassy(head, &sub_tags)
    } else {
        PosTag::from_upos(upos)
    };

    (pos, sub_tags)
}

/// Pipeline over text that is already CoNLL-U annotated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConlluPipeline;

impl super::AnnotationPipeline for ConlluPipeline {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedSentence>> {
        parse_conllu(text)
    }
}
