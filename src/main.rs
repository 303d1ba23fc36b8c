use alletaal_lint::cli::{Cli, Commands};
use alletaal_lint::commands::{self, ScoreConfig, SentenceConfig};
use alletaal_lint::formatting::{ColorMode, FormattingConfig};
use alletaal_lint::observability;
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Score {
            text,
            file,
            conllu,
            lexicon,
            format,
            output,
            detailed,
            strip_markdown,
            config,
            no_parallel,
            plain,
            verbosity: _,
        } => commands::handle_score(ScoreConfig {
            text,
            file,
            conllu,
            lexicon,
            format,
            output,
            detailed,
            strip_markdown,
            config,
            no_parallel,
            formatting_config: formatting_config(plain),
        }),
        Commands::Sentence {
            text,
            conllu,
            lexicon,
            detailed,
            format,
            config,
            verbosity: _,
        } => commands::handle_sentence(SentenceConfig {
            text,
            conllu,
            lexicon,
            detailed,
            format,
            config,
            formatting_config: formatting_config(false),
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}

fn formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
