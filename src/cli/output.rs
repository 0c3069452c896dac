//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::classify::Evaluation;
use crate::cli::args::{AugurArgs, OutputFormat};
use crate::error::Result;
use crate::model::VocabularyModel;

/// Training-pass summary: corpus-wide counts plus one row per category.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub vocabulary_size: usize,
    pub total_words: u64,
    pub categories: Vec<CategoryRow>,
}

/// One category's share of the training corpus.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryRow {
    pub label: String,
    pub total_words: u64,
    pub prior: f64,
}

impl TrainingSummary {
    /// Summarize a trained model, categories in sorted label order.
    pub fn from_model(model: &VocabularyModel) -> Self {
        let categories = model
            .categories()
            .map(|(label, stats)| CategoryRow {
                label: label.to_string(),
                total_words: stats.total_words(),
                prior: model.prior(label),
            })
            .collect();

        Self {
            vocabulary_size: model.vocabulary_size(),
            total_words: model.total_words(),
            categories,
        }
    }
}

/// Evaluation report: per-category outcomes under one scoring scheme.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub scheme: String,
    pub total_documents: u64,
    pub overall_accuracy: f64,
    pub average_accuracy: f64,
    pub categories: Vec<OutcomeRow>,
}

/// One category's tally for the run.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutcomeRow {
    pub label: String,
    pub correct: u64,
    pub guesses: u64,
    pub occurrences: u64,
    pub accuracy: f64,
}

impl EvaluationReport {
    /// Summarize an evaluation run, categories in sorted label order.
    pub fn from_evaluation(evaluation: &Evaluation) -> Self {
        let categories = evaluation
            .tallies()
            .map(|(label, tally)| OutcomeRow {
                label: label.to_string(),
                correct: tally.correct,
                guesses: tally.guesses,
                occurrences: tally.occurrences,
                accuracy: tally.accuracy(),
            })
            .collect();

        Self {
            scheme: evaluation.scheme().name().to_string(),
            total_documents: evaluation.total_documents(),
            overall_accuracy: evaluation.overall_accuracy(),
            average_accuracy: evaluation.average_accuracy(),
            categories,
        }
    }
}

/// Print the training summary in the selected format.
pub fn print_training_summary(summary: &TrainingSummary, args: &AugurArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Training Summary:");
                println!("═════════════════");
            }
            println!("Unique words: {}", summary.vocabulary_size);
            println!("Total words: {}", summary.total_words);
            println!("{:^24}|{:^8}|{:^8}", "Category", "NWords", "P(cat)");
            for row in &summary.categories {
                println!(
                    "{:^24}|{:^8}|{:^8.3}",
                    row.label,
                    row.total_words,
                    100.0 * row.prior
                );
            }
        }
        OutputFormat::Json => print_json(summary, args)?,
    }
    Ok(())
}

/// Print the evaluation report in the selected format.
pub fn print_evaluation_report(report: &EvaluationReport, args: &AugurArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!();
                println!("Evaluation Report:");
                println!("══════════════════");
            }
            println!("Scheme: {}", report.scheme);
            println!(
                "{:^24}|{:^8}|{:^15}|{:^5}|{:^8}",
                "Category", "NCorrect", "NGuesses", "N", "%Correct"
            );
            for row in &report.categories {
                println!(
                    "{:^24}|{:^8}|{:^15}|{:^5}|{:^8.3}",
                    row.label,
                    row.correct,
                    row.guesses,
                    row.occurrences,
                    100.0 * row.accuracy
                );
            }
            println!("Total documents: {}", report.total_documents);
            println!("Overall correct %: {:.3}", 100.0 * report.overall_accuracy);
            println!("Average correct %: {:.3}", 100.0 * report.average_accuracy);
        }
        OutputFormat::Json => print_json(report, args)?,
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, args: &AugurArgs) -> Result<()> {
    let rendered = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
