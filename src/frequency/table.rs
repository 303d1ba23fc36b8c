use super::FrequencyLookup;
use crate::core::{LintError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// In-memory Zipf frequency lexicon for a single language.
///
/// Loaded from TSV lines of the form `word<TAB>zipf`. Blank lines and lines
/// starting with `#` are skipped.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    language: String,
    entries: HashMap<String, f64>,
}

impl FrequencyTable {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: HashMap::new(),
        }
    }

    pub fn from_entries<I, S>(language: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut table = Self::new(language);
        for (word, zipf) in entries {
            table.insert(word, zipf);
        }
        table
    }

    pub fn load(path: &Path, language: impl Into<String>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let table = Self::parse(&contents, language)?;
        tracing::debug!(
            entries = table.len(),
            path = %path.display(),
            "Loaded frequency lexicon"
        );
        Ok(table)
    }

    pub fn parse(contents: &str, language: impl Into<String>) -> Result<Self> {
        let mut table = Self::new(language);

        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, zipf) =
                parse_entry(line).map_err(|msg| LintError::lexicon(line_no + 1, msg))?;
            table.insert(word, zipf);
        }

        Ok(table)
    }

    pub fn insert(&mut self, word: impl Into<String>, zipf: f64) {
        self.entries.insert(word.into(), zipf);
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_entry(line: &str) -> std::result::Result<(&str, f64), String> {
    let mut columns = line.split('\t');
    let word = columns.next().map(str::trim).unwrap_or_default();
    let value = columns
        .next()
        .map(str::trim)
        .ok_or_else(|| format!("expected `word<TAB>zipf`, got {line:?}"))?;

    if word.is_empty() {
        return Err("empty word".to_string());
    }

    let zipf: f64 = value
        .parse()
        .map_err(|_| format!("invalid frequency {value:?} for {word:?}"))?;

    if !zipf.is_finite() || zipf <= 0.0 {
        return Err(format!("frequency for {word:?} must be positive, got {zipf}"));
    }

    Ok((word, zipf))
}

impl FrequencyLookup for FrequencyTable {
    fn zipf_frequency(&self, word: &str, language: &str) -> Option<f64> {
        if language != self.language {
            return None;
        }
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let table = FrequencyTable::parse(
            indoc! {"
                # zipf frequencies
                kat\t4.61

                zit\t5.20
            "},
            "nl",
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.zipf_frequency("kat", "nl"), Some(4.61));
    }

    #[test]
    fn test_lookup_falls_back_to_lowercase() {
        let table = FrequencyTable::from_entries("nl", [("huis", 5.3)]);
        assert_eq!(table.zipf_frequency("Huis", "nl"), Some(5.3));
        assert_eq!(table.zipf_frequency("boom", "nl"), None);
    }

    #[test]
    fn test_lookup_is_language_scoped() {
        let table = FrequencyTable::from_entries("nl", [("kat", 4.6)]);
        assert_eq!(table.zipf_frequency("kat", "en"), None);
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        let err = FrequencyTable::parse("kat\t4.6\nhond\n", "nl").unwrap_err();
        assert!(matches!(err, LintError::Lexicon { line: 2, .. }));

        let err = FrequencyTable::parse("kat\tveel\n", "nl").unwrap_err();
        assert!(matches!(err, LintError::Lexicon { line: 1, .. }));

        let err = FrequencyTable::parse("kat\t0\n", "nl").unwrap_err();
        assert!(matches!(err, LintError::Lexicon { line: 1, .. }));

        let err = FrequencyTable::parse("kat\tinf\n", "nl").unwrap_err();
        assert!(matches!(err, LintError::Lexicon { line: 1, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nl.tsv");
        std::fs::write(&path, "mat\t4.1\n").unwrap();

        let table = FrequencyTable::load(&path, "nl").unwrap();
        assert_eq!(table.language(), "nl");
        assert_eq!(table.zipf_frequency("mat", "nl"), Some(4.1));
    }
}
