//! External annotator process.
//!
//! Runs a configured program (for example a UDPipe or spaCy wrapper script),
//! feeds it the raw text on stdin and reads CoNLL-U from stdout.

use super::{parse_conllu, AnnotatedSentence, AnnotationPipeline};
use crate::core::{LintError, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

#[derive(Debug, Clone)]
pub struct CommandPipeline {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandPipeline {
    /// Resolve `program` on `PATH`.
    pub fn new(program: &str, args: Vec<String>) -> Result<Self> {
        let program = which::which(program).map_err(|e| {
            LintError::Pipeline(format!("annotator {program:?} not found: {e}"))
        })?;
        Ok(Self { program, args })
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    fn run(&self, text: &str) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                LintError::Pipeline(format!("failed to start {}: {e}", self.program.display()))
            })?;

        // stdin is fed concurrently with draining stdout.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = text.to_owned();
            std::thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child.wait_with_output()?;

        if let Some(handle) = writer {
            match handle.join() {
                Ok(Err(e)) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e.into()),
                Err(_) => return Err(LintError::Pipeline("stdin writer panicked".into())),
                _ => {}
            }
        }
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LintError::Pipeline(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| LintError::Pipeline(format!("annotator output is not UTF-8: {e}")))
    }
}

impl AnnotationPipeline for CommandPipeline {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedSentence>> {
        tracing::debug!(program = %self.program.display(), bytes = text.len(), "Running annotator");
        let conllu = self.run(text)?;
        parse_conllu(&conllu)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::core::PosTag;

    #[test]
    fn test_unknown_program_is_pipeline_error() {
        let err = CommandPipeline::new("definitely-not-an-annotator-xyz", Vec::new()).unwrap_err();
        assert!(matches!(err, LintError::Pipeline(_)));
    }

    #[test]
    fn test_reads_conllu_from_stdout() {
        let script = "printf '1\\tJa\\tja\\tINTJ\\t_\\t_\\t0\\troot\\t_\\t_\\n'";
        let pipeline = CommandPipeline::new("sh", vec!["-c".into(), script.into()]).unwrap();

        let sentences = pipeline.annotate("Ja").unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].tokens[0].pos, PosTag::Other);
    }

    #[test]
    fn test_non_zero_exit_is_pipeline_error() {
        let pipeline =
            CommandPipeline::new("sh", vec!["-c".into(), "echo kapot >&2; exit 3".into()])
                .unwrap();
        let err = pipeline.annotate("tekst").unwrap_err();
        match err {
            LintError::Pipeline(message) => assert!(message.contains("kapot")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
