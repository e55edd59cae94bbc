//! Command implementations for the chaff CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use crate::analysis::config::{TokenizerConfig, TokenizerKind};
use crate::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS_SET;
use crate::artifact::{ModelArtifact, VectorizerArtifact};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::ClassifierEngine;
use crate::error::{ChaffError, Result};
use crate::stats::MessageStats;
use crate::vectorize::tfidf::TfIdfVectorizer;

/// Execute a CLI command.
pub fn execute_command(args: ChaffArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
        Command::Tokens(tokens_args) => tokens(tokens_args.clone(), &args),
        Command::Inspect(inspect_args) => inspect(inspect_args.clone(), &args),
        Command::FitVectorizer(fit_args) => fit_vectorizer(fit_args.clone(), &args),
    }
}

/// Classify one message with a trained artifact pair.
fn classify(args: ClassifyArgs, cli_args: &ChaffArgs) -> Result<()> {
    let message = resolve_message(args.message)?;

    if message.trim().is_empty() && cli_args.verbosity() > 0 {
        eprintln!("warning: message is empty; the prediction is driven by the model bias alone");
    }

    let engine = ClassifierEngine::load(&args.vectorizer, &args.model)?;
    let prediction = engine.classify(&message)?;
    let stats = MessageStats::from_text(&message);

    output_classification(&ClassificationResult { prediction, stats }, cli_args)
}

/// Show lexical statistics for a message.
fn stats(args: StatsArgs, cli_args: &ChaffArgs) -> Result<()> {
    let message = resolve_message(args.message)?;
    output_stats(&MessageStats::from_text(&message), cli_args)
}

/// Show the analyzed token stream for a message.
fn tokens(args: TokensArgs, cli_args: &ChaffArgs) -> Result<()> {
    let message = resolve_message(args.message)?;

    let vectorizer = VectorizerArtifact::load(&args.vectorizer)?.build()?;
    let tokens = vectorizer.analyze(&message)?;

    output_tokens(&TokensResult { tokens }, cli_args)
}

/// Summarize artifact files.
fn inspect(args: InspectArgs, cli_args: &ChaffArgs) -> Result<()> {
    if args.vectorizer.is_none() && args.model.is_none() {
        return Err(ChaffError::invalid_operation(
            "inspect needs --vectorizer and/or --model".to_string(),
        ));
    }

    let vectorizer = args
        .vectorizer
        .as_ref()
        .map(|path| -> Result<VectorizerSummary> {
            let artifact = VectorizerArtifact::load(path)?;
            Ok(VectorizerSummary {
                path: path.display().to_string(),
                schema_version: artifact.schema_version,
                dimension: artifact.dimension(),
                n_documents: artifact.n_documents,
                tokenizer: format!("{:?}", artifact.tokenizer.kind),
                lowercase: artifact.tokenizer.lowercase,
                stop_words: artifact.tokenizer.stop_words.len(),
            })
        })
        .transpose()?;

    let model = args
        .model
        .as_ref()
        .map(|path| -> Result<ModelSummary> {
            let artifact = ModelArtifact::load(path)?;
            Ok(ModelSummary {
                path: path.display().to_string(),
                schema_version: artifact.schema_version,
                dimension: artifact.dimension(),
                labels: artifact.labels.clone(),
                threshold: artifact.threshold,
            })
        })
        .transpose()?;

    output_inspect(&InspectResult { vectorizer, model }, cli_args)
}

/// Fit a vectorizer artifact from a corpus file, one document per line.
fn fit_vectorizer(args: FitVectorizerArgs, cli_args: &ChaffArgs) -> Result<()> {
    let file = File::open(&args.corpus)?;
    let reader = BufReader::new(file);

    let documents: Vec<String> = reader
        .lines()
        .collect::<io::Result<Vec<_>>>()?
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect();

    if documents.is_empty() {
        return Err(ChaffError::invalid_operation(format!(
            "corpus file {} contains no documents",
            args.corpus.display()
        )));
    }

    let stop_words = if args.english_stop_words {
        // Sorted so the artifact content is deterministic.
        let mut words: Vec<String> = DEFAULT_ENGLISH_STOP_WORDS_SET.iter().cloned().collect();
        words.sort_unstable();
        words
    } else {
        Vec::new()
    };

    let config = TokenizerConfig {
        kind: TokenizerKind::Regex,
        token_pattern: args.token_pattern.clone(),
        lowercase: !args.no_lowercase,
        stop_words,
    };

    let vectorizer = TfIdfVectorizer::fit(config, &documents, args.min_df)?;
    VectorizerArtifact::from_vectorizer(&vectorizer).save(&args.output)?;

    output_fit(
        &FitResult {
            output: args.output.display().to_string(),
            documents: documents.len(),
            dimension: vectorizer.dimension(),
        },
        cli_args,
    )
}

/// Take the message from the argument, or read it from stdin.
fn resolve_message(message: Option<String>) -> Result<String> {
    match message {
        Some(message) => Ok(message),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
