//! Command line argument parsing for the Augur CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::classify::Scheme;

/// Augur - a naive Bayes text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "augur")]
#[command(about = "A naive Bayes text classifier for whitespace-tokenized corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AugurArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
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

    /// Score test documents in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Labeled training corpus, one document per line
    #[arg(value_name = "TRAIN_FILE")]
    pub train_file: PathBuf,

    /// Labeled test corpus, one document per line
    #[arg(value_name = "TEST_FILE")]
    pub test_file: PathBuf,

    /// Probability estimation scheme
    #[arg(value_name = "SCHEME")]
    pub scheme: SchemeName,
}

impl AugurArgs {
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

/// Scoring schemes selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeName {
    /// Raw relative frequency, multiplicative
    Raw,
    /// m-estimate smoothed log-likelihood
    Mest,
    /// TF-IDF weighted log-likelihood
    Tfidf,
}

impl From<SchemeName> for Scheme {
    fn from(name: SchemeName) -> Self {
        match name {
            SchemeName::Raw => Scheme::Raw,
            SchemeName::Mest => Scheme::MEstimate,
            SchemeName::Tfidf => Scheme::TfIdf,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
