//! Command implementation for the Augur CLI.

use std::time::Instant;

use crate::classify::{Classifier, Scheme};
use crate::cli::args::{AugurArgs, OutputFormat};
use crate::cli::output::{
    EvaluationReport, TrainingSummary, print_evaluation_report, print_training_summary,
};
use crate::corpus;
use crate::error::Result;
use crate::model::VocabularyModel;

/// Train on the training corpus, evaluate the test corpus under the selected
/// scheme, and print both reports.
pub fn execute_command(args: AugurArgs) -> Result<()> {
    let start = Instant::now();
    let scheme = Scheme::from(args.scheme);

    if args.verbosity() > 1 {
        println!("Training from: {}", args.train_file.display());
    }
    let training = corpus::read_labeled_file(&args.train_file)?;
    let model = VocabularyModel::from_documents(&training);
    print_training_summary(&TrainingSummary::from_model(&model), &args)?;

    let classifier = Classifier::new(model)?;

    if args.verbosity() > 1 {
        println!(
            "Evaluating: {} ({} scheme)",
            args.test_file.display(),
            scheme
        );
    }
    let test = corpus::read_labeled_file(&args.test_file)?;
    let evaluation = if args.parallel {
        classifier.evaluate_parallel(&test, scheme)?
    } else {
        classifier.evaluate(&test, scheme)?
    };
    print_evaluation_report(&EvaluationReport::from_evaluation(&evaluation), &args)?;

    if args.verbosity() > 0 && matches!(args.output_format, OutputFormat::Human) {
        println!();
        println!("Elapsed: {:.3}s", start.elapsed().as_secs_f64());
    }

    Ok(())
}
