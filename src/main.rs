use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod diagnostic;
mod exit_codes;
mod input;
mod output;
mod suggest;
use config::Config;
use output::{HelpResponse, JsonError, Output, VersionResponse};
use suggest::SuggestError;

/// Version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `rank` defaults: keep everything, return everything
const RANK_DEFAULT_THRESHOLD: i64 = -1;
const RANK_DEFAULT_LIMIT: i64 = -1;

/// `check` defaults: a few close suggestions per unknown word
const CHECK_DEFAULT_THRESHOLD: i64 = 2;
const CHECK_DEFAULT_LIMIT: i64 = 3;

#[derive(Parser)]
#[command(name = "fuzzrank")]
#[command(version = VERSION)]
#[command(about = "Rank candidate words by edit distance", long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Path to config file (default: ./fuzzrank.toml)
    #[arg(long = "config", global = true)]
    config_path: Option<PathBuf>,

    /// Minimal output (errors only)
    #[arg(long, global = true)]
    quiet: bool,

    /// Show extra detail on stderr
    #[arg(long, global = true)]
    verbose: bool,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the edit distance between two strings
    Distance {
        a: String,
        b: String,
    },
    /// Rank candidates by edit distance from INPUT
    Rank {
        /// Word to match against
        input: String,
        /// Candidate words
        candidates: Vec<String>,
        /// Read more candidates from a file (one per line), or '-' for stdin
        #[arg(long, value_name = "PATH")]
        from: Option<String>,
        /// Maximum distance to keep; -1 keeps every candidate
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<i64>,
        /// Maximum number of results; -1 returns every match
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Validate word lists against a vocabulary
    Check {
        /// Word list files, or '-' for stdin
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
        /// Vocabulary file, one word per line (overrides [vocabulary] in config)
        #[arg(long, value_name = "PATH")]
        vocabulary: Option<String>,
        /// Maximum distance for suggestions; -1 disables filtering
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<i64>,
        /// Maximum number of suggestions per word; -1 for all
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
}

fn main() {
    // Check for --json flag early (before full parsing) for error handling
    let json_mode = std::env::args().any(|arg| arg == "--json");

    // Use try_parse to handle clap errors in JSON mode
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if json_mode {
                match e.kind() {
                    ErrorKind::DisplayHelp => {
                        HelpResponse::new(e.to_string()).print();
                        std::process::exit(exit_codes::SUCCESS);
                    }
                    ErrorKind::DisplayVersion => {
                        VersionResponse::new(VERSION.to_string()).print();
                        std::process::exit(exit_codes::SUCCESS);
                    }
                    _ => {
                        JsonError::with_code("usage_error", e.to_string(), None).print();
                        std::process::exit(exit_codes::USAGE);
                    }
                }
            } else {
                // Human mode: let clap print its formatted output
                e.exit();
            }
        }
    };

    let output = Output::new(cli.json, cli.quiet, cli.verbose);

    let config = match Config::load(cli.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e, &output);
            std::process::exit(exit_codes::CONFIG_ERROR);
        }
    };

    match run(cli, &config, &output) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            report_error(&e, &output);
            let code = match e.downcast_ref::<SuggestError>() {
                Some(err) => exit_codes::for_suggest_error(err),
                None => exit_codes::OPERATIONAL_FAILURE,
            };
            std::process::exit(code);
        }
    }
}

/// JSON mode: structured error on stdout. Human mode: full chain on stderr.
fn report_error(e: &anyhow::Error, output: &Output) {
    if output.is_json() {
        match e.downcast_ref::<SuggestError>() {
            Some(err) => JsonError::from(err).print(),
            None => JsonError::with_details(e.to_string(), format!("{e:#}")).print(),
        }
    } else {
        eprintln!("Error: {e:#}");
    }
}

fn run(cli: Cli, config: &Config, output: &Output) -> Result<i32> {
    match cli.command {
        Commands::Distance { a, b } => commands::distance(output, &a, &b),
        Commands::Rank {
            input,
            candidates,
            from,
            threshold,
            limit,
        } => {
            if candidates.is_empty() && from.is_none() {
                output.warn("No candidates given; pass them as arguments or with --from");
            }
            commands::rank(
                output,
                &input,
                candidates,
                from.as_deref(),
                config.threshold(threshold, RANK_DEFAULT_THRESHOLD),
                config.limit(limit, RANK_DEFAULT_LIMIT),
            )
        }
        Commands::Check {
            paths,
            vocabulary,
            threshold,
            limit,
        } => {
            let words = config
                .vocabulary(vocabulary.as_deref())
                .context("Failed to load vocabulary")?;
            output.verbose(&format!("Vocabulary: {} word(s)", words.len()));
            commands::check(
                output,
                &paths,
                &words,
                config.threshold(threshold, CHECK_DEFAULT_THRESHOLD),
                config.limit(limit, CHECK_DEFAULT_LIMIT),
            )
        }
    }
}
