//! Niihau - command line entrypoint.
//!
//! Loads configuration, initializes logging, builds a prefix trie from a
//! vocabulary file and answers lookups against it. Results go to stdout,
//! logs to stderr.

use clap::{Parser, Subcommand};
use niihau_lib::config::{self, ConfigLoader, LogConfig, NiihauConfig, ENV_PREFIX};
use niihau_lib::data_structures::PrefixTrie;
use niihau_lib::error::{
    get_error_reporting, ErrorContext, NiihauError, NiihauResult, EXIT_ERROR, EXIT_NO_MATCH,
};
use niihau_lib::vocabulary::{VocabularyFormat, VocabularyLoader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Niihau.
#[derive(Parser, Debug)]
#[clap(
    name = "niihau",
    version = niihau_lib::VERSION,
    author,
    about,
    after_help = "Exit status: 0 on success, 1 when `lookup` finds no match, 2 on any error."
)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,

    /// Path to the vocabulary file (overrides vocabulary.path)
    #[clap(short, long, value_parser, global = true)]
    vocab: Option<PathBuf>,

    /// Vocabulary file format (overrides vocabulary.format)
    #[clap(long, value_enum, global = true)]
    format: Option<VocabularyFormat>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the longest vocabulary entry that prefixes INPUT
    ///
    /// Exits with status 1 when nothing matches and 2 when the vocabulary
    /// or configuration cannot be loaded.
    Lookup {
        /// Input to match
        input: String,
    },

    /// Print the vocabulary entries INPUT resolves to, one per line
    Complete {
        /// Partial input
        input: String,

        /// Print at most this many entries
        #[clap(short, long)]
        limit: Option<usize>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    /// Subcommand name as typed on the command line.
    fn name(&self) -> &'static str {
        match self {
            Command::Lookup { .. } => "lookup",
            Command::Complete { .. } => "complete",
            Command::Validate => "validate",
            Command::GenConfig { .. } => "gen-config",
        }
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> NiihauResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| NiihauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds the trie from the vocabulary named on the command line or in the configuration.
fn load_trie(args: &Args, config: &NiihauConfig) -> NiihauResult<PrefixTrie> {
    let path = args
        .vocab
        .clone()
        .or_else(|| config.vocabulary.path.clone())
        .ok_or_else(|| {
            NiihauError::Custom("No vocabulary given; use --vocab or set vocabulary.path".into())
        })?;

    let mut loader = VocabularyLoader::from_config(config);
    if let Some(format) = args.format {
        loader = loader.with_format(format);
    }
    Ok(loader.load(&path)?)
}

fn run(args: Args) -> NiihauResult<ExitCode> {
    let config = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load()?;
    init_logging(&config.log)?;
    niihau_lib::init();

    match &args.command {
        Command::Lookup { input } => {
            let trie = load_trie(&args, &config)?;
            match trie.longest_prefix_match(input) {
                Some(found) => {
                    println!("{found}");
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    info!(input = %input, "no prefix match");
                    Ok(ExitCode::from(EXIT_NO_MATCH))
                }
            }
        }
        Command::Complete { input, limit } => {
            let trie = load_trie(&args, &config)?;
            let found = trie.match_completions(input);
            for entry in found.iter().take(limit.unwrap_or(usize::MAX)) {
                println!("{entry}");
            }
            info!(input = %input, total = found.len(), "completions listed");
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("configuration is valid");
            Ok(ExitCode::SUCCESS)
        }
        Command::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(output, config::to_toml(&NiihauConfig::default())?)?;
            info!("Default configuration written to {:?}", output);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();
    let command = args.command.name();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            get_error_reporting()
                .report(ErrorContext::new(e, "niihau").with_details(format!("command: {command}")));
            ExitCode::from(EXIT_ERROR)
        }
    }
}
