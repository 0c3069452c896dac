//! End-to-end tests: corpus files on disk through training, scoring, and
//! evaluation.

use std::io::Write;

use augur::classify::{Classifier, Scheme};
use augur::corpus::{self, LabeledDocument};
use augur::model::VocabularyModel;

fn corpus_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn words(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_train_from_file_matches_worked_example() {
    let train = corpus_file(&["A foo foo bar", "B baz"]);

    let documents = corpus::read_labeled_file(train.path()).unwrap();
    let model = VocabularyModel::from_documents(&documents);

    assert_eq!(model.num_categories(), 2);
    assert_eq!(model.category("A").unwrap().total_words(), 3);
    assert_eq!(model.category("B").unwrap().total_words(), 1);
    assert_eq!(model.total_words(), 4);
    assert_eq!(model.vocabulary_size(), 3);
    assert_eq!(model.document_frequency("foo"), Some(1));

    let classifier = Classifier::new(model).unwrap();
    assert_eq!(classifier.classify(Scheme::Raw, &words(&["foo"])), "A");
}

#[test]
fn test_full_run_tally_sums() {
    let train = corpus_file(&[
        "sports ball game score ball",
        "politics vote debate law",
        "politics vote vote",
        "weather rain sun rain cloud",
    ]);
    let test = corpus_file(&[
        "sports ball score",
        "sports game",
        "politics debate law law",
        "weather sun cloud",
        "weather snow",
        "politics vote",
    ]);

    let model = VocabularyModel::from_documents(&corpus::read_labeled_file(train.path()).unwrap());
    let classifier = Classifier::new(model).unwrap();
    let documents = corpus::read_labeled_file(test.path()).unwrap();

    for scheme in Scheme::ALL {
        let evaluation = classifier.evaluate(&documents, scheme).unwrap();

        let occurrences: u64 = evaluation.tallies().map(|(_, t)| t.occurrences).sum();
        let guesses: u64 = evaluation.tallies().map(|(_, t)| t.guesses).sum();
        assert_eq!(occurrences, documents.len() as u64);
        assert_eq!(guesses, documents.len() as u64);
        assert_eq!(evaluation.total_documents(), documents.len() as u64);

        // Same run again, same tallies: the model is frozen after training.
        let again = classifier.evaluate(&documents, scheme).unwrap();
        assert_eq!(evaluation, again);

        // The parallel path merges per-worker tallies into the same result.
        let parallel = classifier.evaluate_parallel(&documents, scheme).unwrap();
        assert_eq!(evaluation, parallel);
    }
}

#[test]
fn test_category_totals_sum_to_corpus_total() {
    let train = corpus_file(&[
        "a x y z",
        "b x",
        "c y y y y",
        "a z",
        "",
        "b",
    ]);

    let model = VocabularyModel::from_documents(&corpus::read_labeled_file(train.path()).unwrap());
    let sum: u64 = model.categories().map(|(_, stats)| stats.total_words()).sum();
    assert_eq!(sum, model.total_words());
    assert_eq!(model.total_words(), 9);

    // Every vocabulary word occurs in between 1 and num_categories categories.
    for word in ["x", "y", "z"] {
        let df = model.document_frequency(word).unwrap();
        assert!(df >= 1 && df <= model.num_categories());
    }
}

#[test]
fn test_schemes_separate_obvious_categories() {
    let train = corpus_file(&[
        "rust borrow checker lifetime trait cargo",
        "rust cargo crate module trait",
        "cooking salt pepper onion garlic pan",
        "cooking oven dough flour salt",
    ]);
    let test_docs = vec![
        LabeledDocument::new("rust", words(&["cargo", "trait"])),
        LabeledDocument::new("cooking", words(&["salt", "oven"])),
    ];

    let model = VocabularyModel::from_documents(&corpus::read_labeled_file(train.path()).unwrap());
    let classifier = Classifier::new(model).unwrap();

    for scheme in Scheme::ALL {
        let evaluation = classifier.evaluate(&test_docs, scheme).unwrap();
        assert_eq!(
            evaluation.total_correct(),
            2,
            "scheme {scheme} misclassified an unambiguous document"
        );
    }
}

#[test]
fn test_long_document_underflow_behavior() {
    // The raw product underflows toward zero on long documents; the log-space
    // schemes keep separating the categories.
    let train = corpus_file(&["a foo bar", "b baz qux"]);

    let model = VocabularyModel::from_documents(&corpus::read_labeled_file(train.path()).unwrap());
    let classifier = Classifier::new(model).unwrap();

    let long_doc = vec!["baz".to_string(); 2000];
    assert_eq!(classifier.classify(Scheme::MEstimate, &long_doc), "b");
    assert_eq!(classifier.classify(Scheme::TfIdf, &long_doc), "b");
}

#[test]
fn test_unreadable_corpus_is_fatal() {
    let result = corpus::read_labeled_file("/definitely/not/here.txt");
    assert!(result.is_err());
}
