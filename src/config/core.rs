use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::features::{ScoringOptions, DEFAULT_LANGUAGE};

/// Root configuration structure, read from `.alletaal-lint.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LintConfig {
    /// Feature extraction settings
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    /// Word frequency database
    #[serde(default)]
    pub frequency: Option<FrequencyConfig>,

    /// External annotation command
    #[serde(default)]
    pub pipeline: Option<PipelineConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Parallel sentence scoring
    #[serde(default)]
    pub parallel: Option<ParallelConfig>,

    /// Directory of the file this config was read from
    #[serde(skip)]
    pub config_dir: Option<PathBuf>,
}

impl LintConfig {
    pub fn language(&self) -> String {
        self.scoring
            .as_ref()
            .and_then(|s| s.language.clone())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    }

    pub fn long_dependency_adjustment(&self) -> bool {
        self.scoring
            .as_ref()
            .and_then(|s| s.long_dependency_adjustment)
            .unwrap_or(false)
    }

    pub fn parallel_enabled(&self) -> bool {
        self.parallel.as_ref().map(|p| p.enabled).unwrap_or(true)
    }

    /// Configured lexicon; relative paths resolve against the config file's directory.
    pub fn lexicon_path(&self) -> Option<PathBuf> {
        let lexicon = self.frequency.as_ref()?.lexicon.as_ref()?;
        Some(self.resolve_path(lexicon))
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.config_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn default_format(&self) -> Option<String> {
        self.output.as_ref().and_then(|o| o.default_format.clone())
    }

    pub fn strip_markdown(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.strip_markdown)
            .unwrap_or(false)
    }

    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            language: self.language(),
            long_dependency_adjustment: self.long_dependency_adjustment(),
            parallel: self.parallel_enabled(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoringConfig {
    /// Language code for frequency lookups (default: "nl")
    #[serde(default)]
    pub language: Option<String>,
    /// Apply the T-Scan reduction to dependency distances above 3
    #[serde(default)]
    pub long_dependency_adjustment: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FrequencyConfig {
    /// TSV file of `word<TAB>zipf` lines
    #[serde(default)]
    pub lexicon: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Program that reads text on stdin and writes CoNLL-U to stdout
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    #[serde(default)]
    pub strip_markdown: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelConfig {
    #[serde(default = "default_parallel_enabled")]
    pub enabled: bool,
}

fn default_parallel_enabled() -> bool {
    true
}
