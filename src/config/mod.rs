// Core configuration types
mod core;
mod loader;

pub use self::core::{
    FrequencyConfig, LintConfig, OutputConfig, ParallelConfig, PipelineConfig, ScoringConfig,
};
pub use self::loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};

/// Commented template written by `alletaal-lint init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# alletaal-lint configuration

[scoring]
language = "nl"
# Reduce maximum dependency distances above 3 by 2 (T-Scan behaviour)
long_dependency_adjustment = false

[frequency]
# TSV lexicon with `word<TAB>zipf` lines
# lexicon = "data/nl-zipf.tsv"

# Annotator that reads text on stdin and prints CoNLL-U on stdout
# [pipeline]
# command = "udpipe"
# args = ["--tokenize", "--tag", "--parse", "dutch-alpino.udpipe"]

[output]
default_format = "table"
strip_markdown = false

[parallel]
enabled = true
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LintError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_accessors() {
        let config = LintConfig::default();
        assert_eq!(config.language(), "nl");
        assert!(!config.long_dependency_adjustment());
        assert!(config.parallel_enabled());
        assert!(config.lexicon_path().is_none());
        assert!(!config.strip_markdown());
    }

    #[test]
    fn test_template_parses() {
        let config = parse_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.default_format().as_deref(), Some("table"));
        assert!(config.pipeline.is_none());
        assert_eq!(config.scoring_options(), crate::features::ScoringOptions::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[scoring]
language = "nl"
long_dependency_adjustment = true

[frequency]
lexicon = "lexicon/nl.tsv"

[pipeline]
command = "udpipe"
args = ["--parse"]

[parallel]
enabled = false
"#;
        let config = parse_config(toml_content).unwrap();
        assert!(config.long_dependency_adjustment());
        assert!(!config.parallel_enabled());
        assert_eq!(
            config.lexicon_path(),
            Some(std::path::PathBuf::from("lexicon/nl.tsv"))
        );
        let pipeline = config.pipeline.unwrap();
        assert_eq!(pipeline.command, "udpipe");
        assert_eq!(pipeline.args, vec!["--parse"]);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_config("invalid toml [[ content");
        assert!(result.unwrap_err().contains("Failed to parse"));
    }

    #[test]
    fn test_discover_config_in_ancestor() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[scoring]\nlanguage = \"fy\"\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.language(), "fy");
    }

    #[test]
    fn test_lexicon_resolves_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("docs");
        fs::create_dir_all(&nested).unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[frequency]\nlexicon = \"nl.tsv\"\n").unwrap();

        let discovered = discover_config(nested);
        assert_eq!(discovered.lexicon_path(), Some(temp.path().join("nl.tsv")));

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.lexicon_path(), Some(temp.path().join("nl.tsv")));
    }

    #[test]
    fn test_absolute_lexicon_ignores_config_dir() {
        let temp = TempDir::new().unwrap();
        let lexicon = temp.path().join("nl.tsv");
        let config = LintConfig {
            frequency: Some(FrequencyConfig {
                lexicon: Some(lexicon.clone()),
            }),
            ..Default::default()
        }
        .with_config_dir("/elders");
        assert_eq!(config.lexicon_path(), Some(lexicon));
    }

    #[test]
    fn test_discover_config_ignores_invalid_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "[[ nope").unwrap();
        let config = discover_config(temp.path().to_path_buf());
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_load_config_from_reports_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[[ nope").unwrap();
        assert!(matches!(load_config_from(&path), Err(LintError::Config(_))));

        let missing = temp.path().join("missing.toml");
        assert!(matches!(load_config_from(&missing), Err(LintError::Io(_))));
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors("/a/b/c/d".into(), 2).collect();
        assert_eq!(dirs.len(), 2);
    }
}
