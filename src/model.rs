//! Vocabulary model: word-frequency statistics accumulated from a labeled
//! training corpus.

use std::collections::BTreeMap;

use ahash::{AHashMap, AHashSet};

use crate::corpus::LabeledDocument;

/// Per-category word statistics.
#[derive(Debug, Clone, Default)]
pub struct CategoryStats {
    /// Total word occurrences across all training documents of the category.
    total_words: u64,
    /// Occurrence count per word within the category.
    word_counts: AHashMap<String, u64>,
}

impl CategoryStats {
    /// Total number of word occurrences trained into this category.
    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// Number of times `word` occurred in this category's training documents.
    pub fn count(&self, word: &str) -> u64 {
        self.word_counts.get(word).copied().unwrap_or(0)
    }

    /// Whether `word` occurred at least once in this category.
    pub fn contains(&self, word: &str) -> bool {
        self.word_counts.contains_key(word)
    }

    /// Number of distinct words seen in this category.
    pub fn distinct_words(&self) -> usize {
        self.word_counts.len()
    }
}

/// Word-frequency statistics over a labeled training corpus.
///
/// The model is built by a single linear training pass ([`ingest`] once per
/// document) and is treated as immutable for however many evaluation runs
/// follow. Categories enumerate in sorted label order; that order is the
/// stable order the classifier scores and tie-breaks in.
///
/// [`ingest`]: VocabularyModel::ingest
#[derive(Debug, Clone, Default)]
pub struct VocabularyModel {
    /// Category label -> per-category statistics, sorted by label.
    categories: BTreeMap<String, CategoryStats>,
    /// Every distinct word observed during training, each entered once.
    vocabulary: AHashSet<String>,
    /// Word -> number of distinct categories containing it at least once.
    document_frequency: AHashMap<String, usize>,
    /// Word occurrences across the whole training corpus.
    total_words: u64,
}

impl VocabularyModel {
    /// Create an empty, untrained model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Train a model from a sequence of labeled documents.
    pub fn from_documents<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a LabeledDocument>,
    {
        let mut model = Self::new();
        for document in documents {
            model.ingest(&document.label, &document.words);
        }
        model
    }

    /// Fold one labeled training document into the model.
    ///
    /// A previously unseen label creates its category at a zero count. Word
    /// counts accumulate across repeated calls for the same category. The
    /// document frequency of a word rises exactly once per (word, category)
    /// pair, on the word's first occurrence within that category. Any string
    /// is a valid label or word.
    pub fn ingest(&mut self, label: &str, words: &[String]) {
        let Self {
            categories,
            vocabulary,
            document_frequency,
            total_words,
        } = self;

        let stats = categories.entry(label.to_string()).or_default();
        stats.total_words += words.len() as u64;
        *total_words += words.len() as u64;

        for word in words {
            let count = stats.word_counts.entry(word.clone()).or_insert(0);
            *count += 1;
            if *count == 1 {
                // First occurrence of this word within this category.
                vocabulary.insert(word.clone());
                *document_frequency.entry(word.clone()).or_insert(0) += 1;
            }
        }
    }

    /// Category labels with their statistics, in sorted label order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &CategoryStats)> {
        self.categories
            .iter()
            .map(|(label, stats)| (label.as_str(), stats))
    }

    /// Statistics for one category, if it occurred in training.
    pub fn category(&self, label: &str) -> Option<&CategoryStats> {
        self.categories.get(label)
    }

    /// Whether `label` occurred in training.
    pub fn contains_category(&self, label: &str) -> bool {
        self.categories.contains_key(label)
    }

    /// Number of categories seen during training.
    pub fn num_categories(&self) -> usize {
        self.categories.len()
    }

    /// Whether the model has seen no training documents at all.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of distinct words across the whole training corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether `word` was observed anywhere during training.
    pub fn contains_word(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Number of distinct categories `word` occurs in, or `None` for a word
    /// never observed in training.
    pub fn document_frequency(&self, word: &str) -> Option<usize> {
        self.document_frequency.get(word).copied()
    }

    /// Word occurrences across the whole training corpus.
    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// A category's share of all training words, the scoring seed.
    ///
    /// Zero for unknown categories and for a model without any words.
    pub fn prior(&self, label: &str) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        match self.categories.get(label) {
            Some(stats) => stats.total_words as f64 / self.total_words as f64,
            None => 0.0,
        }
    }
}
