use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "alletaal-lint")]
#[command(about = "LiNT readability scoring for Dutch text", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a document and report its readability level
    Score {
        /// Text to analyze
        #[arg(short, long, conflicts_with_all = ["file", "conllu"])]
        text: Option<String>,

        /// Plain text file to analyze
        #[arg(short, long, conflicts_with = "conllu")]
        file: Option<PathBuf>,

        /// Pre-annotated CoNLL-U file (no annotator needed)
        #[arg(long)]
        conllu: Option<PathBuf>,

        /// Word frequency lexicon (TSV: word<TAB>zipf)
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Output format (defaults to the configured format, then table)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include the per-sentence breakdown
        #[arg(short, long)]
        detailed: bool,

        /// Remove markdown markup before annotation
        #[arg(long = "strip-markdown")]
        strip_markdown: bool,

        /// Configuration file (defaults to .alletaal-lint.toml discovery)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Score sentences sequentially
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Disable colors in terminal output
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Score a single sentence
    Sentence {
        /// Sentence text
        #[arg(conflicts_with = "conllu")]
        text: Option<String>,

        /// Pre-annotated CoNLL-U file holding the sentence
        #[arg(long)]
        conllu: Option<PathBuf>,

        /// Word frequency lexicon (TSV: word<TAB>zipf)
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Show the four feature values
        #[arg(short, long)]
        detailed: bool,

        /// Output format (defaults to the configured format, then table)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Configuration file (defaults to .alletaal-lint.toml discovery)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Score { verbosity, .. } | Commands::Sentence { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}
