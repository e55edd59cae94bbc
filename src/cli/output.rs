//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{ChaffArgs, OutputFormat};
use crate::engine::Prediction;
use crate::error::Result;
use crate::stats::MessageStats;

/// Result structure for the classify command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub prediction: Prediction,
    pub stats: MessageStats,
}

/// Result structure for the tokens command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokensResult {
    pub tokens: Vec<String>,
}

/// Summary of a vectorizer artifact.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorizerSummary {
    pub path: String,
    pub schema_version: u32,
    pub dimension: usize,
    pub n_documents: usize,
    pub tokenizer: String,
    pub lowercase: bool,
    pub stop_words: usize,
}

/// Summary of a model artifact.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelSummary {
    pub path: String,
    pub schema_version: u32,
    pub dimension: usize,
    pub labels: [String; 2],
    pub threshold: f64,
}

/// Result structure for the inspect command.
#[derive(Debug, Serialize, Deserialize)]
pub struct InspectResult {
    pub vectorizer: Option<VectorizerSummary>,
    pub model: Option<ModelSummary>,
}

/// Result structure for the fit-vectorizer command.
#[derive(Debug, Serialize, Deserialize)]
pub struct FitResult {
    pub output: String,
    pub documents: usize,
    pub dimension: usize,
}

/// Output a classification result.
pub fn output_classification(result: &ClassificationResult, args: &ChaffArgs) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return output_json(result, args);
    }

    let prediction = &result.prediction;
    println!("label: {}", prediction.label);
    println!("confidence: {:.2}%", prediction.confidence() * 100.0);
    for entry in &prediction.probabilities {
        println!("  p({}) = {:.6}", entry.label, entry.probability);
    }

    if args.verbosity() > 0 {
        let stats = &result.stats;
        println!();
        println!("characters: {}", stats.char_count);
        println!("words: {}", stats.word_count);
        println!("urls: {}", if stats.has_url { "yes" } else { "no" });
        println!("digits: {}", if stats.has_digits { "yes" } else { "no" });
        println!("uppercase: {:.0}%", stats.uppercase_ratio * 100.0);
        println!("exclamations: {}", stats.exclamation_count);
    }

    Ok(())
}

/// Output lexical statistics.
pub fn output_stats(stats: &MessageStats, args: &ChaffArgs) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return output_json(stats, args);
    }

    println!("characters: {}", stats.char_count);
    println!("words: {}", stats.word_count);
    println!("urls: {}", if stats.has_url { "yes" } else { "no" });
    println!("digits: {}", if stats.has_digits { "yes" } else { "no" });
    println!("uppercase: {:.0}%", stats.uppercase_ratio * 100.0);
    println!("exclamations: {}", stats.exclamation_count);

    Ok(())
}

/// Output an analyzed token stream.
pub fn output_tokens(result: &TokensResult, args: &ChaffArgs) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return output_json(result, args);
    }

    for token in &result.tokens {
        println!("{token}");
    }

    Ok(())
}

/// Output artifact summaries.
pub fn output_inspect(result: &InspectResult, args: &ChaffArgs) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return output_json(result, args);
    }

    if let Some(vectorizer) = &result.vectorizer {
        println!("vectorizer: {}", vectorizer.path);
        println!("  schema version: {}", vectorizer.schema_version);
        println!("  dimension: {}", vectorizer.dimension);
        println!("  fitted on: {} documents", vectorizer.n_documents);
        println!("  tokenizer: {}", vectorizer.tokenizer);
        println!("  lowercase: {}", vectorizer.lowercase);
        println!("  stop words: {}", vectorizer.stop_words);
    }

    if let Some(model) = &result.model {
        println!("model: {}", model.path);
        println!("  schema version: {}", model.schema_version);
        println!("  dimension: {}", model.dimension);
        println!("  labels: [{}, {}]", model.labels[0], model.labels[1]);
        println!("  threshold: {}", model.threshold);
    }

    Ok(())
}

/// Output a fit-vectorizer result.
pub fn output_fit(result: &FitResult, args: &ChaffArgs) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return output_json(result, args);
    }

    println!(
        "fitted vectorizer on {} documents ({} vocabulary columns)",
        result.documents, result.dimension
    );
    println!("written to: {}", result.output);

    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ChaffArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
