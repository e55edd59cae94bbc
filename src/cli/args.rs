//! Command line argument parsing for the chaff CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// chaff - TF-IDF spam filtering for short text messages
#[derive(Parser, Debug, Clone)]
#[command(name = "chaff")]
#[command(about = "Classify short text messages as spam or ham")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ChaffArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ChaffArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a message with a trained artifact pair
    #[command(name = "classify")]
    Classify(ClassifyArgs),

    /// Show lexical statistics for a message
    #[command(name = "stats")]
    Stats(StatsArgs),

    /// Show the analyzed token stream for a message
    #[command(name = "tokens")]
    Tokens(TokensArgs),

    /// Summarize artifact files
    #[command(name = "inspect")]
    Inspect(InspectArgs),

    /// Fit a vectorizer artifact from a corpus file
    #[command(name = "fit-vectorizer")]
    FitVectorizer(FitVectorizerArgs),
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Arguments for the classify command
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the vectorizer artifact
    #[arg(long, env = "CHAFF_VECTORIZER")]
    pub vectorizer: PathBuf,

    /// Path to the model artifact
    #[arg(long, env = "CHAFF_MODEL")]
    pub model: PathBuf,

    /// The message to classify; read from stdin when omitted
    pub message: Option<String>,
}

/// Arguments for the stats command
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// The message to analyze; read from stdin when omitted
    pub message: Option<String>,
}

/// Arguments for the tokens command
#[derive(Args, Debug, Clone)]
pub struct TokensArgs {
    /// Path to the vectorizer artifact whose pipeline is applied
    #[arg(long, env = "CHAFF_VECTORIZER")]
    pub vectorizer: PathBuf,

    /// The message to analyze; read from stdin when omitted
    pub message: Option<String>,
}

/// Arguments for the inspect command
#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Path to a vectorizer artifact
    #[arg(long)]
    pub vectorizer: Option<PathBuf>,

    /// Path to a model artifact
    #[arg(long)]
    pub model: Option<PathBuf>,
}

/// Arguments for the fit-vectorizer command
#[derive(Args, Debug, Clone)]
pub struct FitVectorizerArgs {
    /// Corpus file, one document per line
    pub corpus: PathBuf,

    /// Where to write the vectorizer artifact
    #[arg(short, long)]
    pub output: PathBuf,

    /// Minimum document frequency for a token to enter the vocabulary
    #[arg(long, default_value_t = 1)]
    pub min_df: usize,

    /// Token pattern for the regex tokenizer
    #[arg(long, default_value = r"\w+")]
    pub token_pattern: String,

    /// Keep the original casing instead of lowercasing tokens
    #[arg(long)]
    pub no_lowercase: bool,

    /// Filter the default English stop word list
    #[arg(long)]
    pub english_stop_words: bool,
}
