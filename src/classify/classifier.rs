//! Argmax classification over a trained vocabulary model.

use std::collections::BTreeMap;

use anyhow::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::scoring::{self, Scheme};
use crate::corpus::LabeledDocument;
use crate::model::VocabularyModel;

/// Per-category outcome tally for one evaluation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    /// Test documents truly labeled with this category.
    pub occurrences: u64,
    /// Documents whose decision matched this true label.
    pub correct: u64,
    /// Documents for which this category was the decision.
    pub guesses: u64,
}

impl CategoryTally {
    /// Fraction of this category's test documents classified correctly.
    ///
    /// Zero for a category that never occurred in the test set.
    pub fn accuracy(&self) -> f64 {
        if self.occurrences == 0 {
            return 0.0;
        }
        self.correct as f64 / self.occurrences as f64
    }

    fn merge(&mut self, other: &CategoryTally) {
        self.occurrences += other.occurrences;
        self.correct += other.correct;
        self.guesses += other.guesses;
    }
}

/// Outcome of one evaluation run: one scoring scheme applied to one test set.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    scheme: Scheme,
    tallies: BTreeMap<String, CategoryTally>,
}

impl Evaluation {
    /// The scheme the run was scored under.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Per-category tallies in sorted label order.
    pub fn tallies(&self) -> impl Iterator<Item = (&str, &CategoryTally)> {
        self.tallies
            .iter()
            .map(|(label, tally)| (label.as_str(), tally))
    }

    /// The tally for one category.
    pub fn tally(&self, label: &str) -> Option<&CategoryTally> {
        self.tallies.get(label)
    }

    /// Number of test documents in the run.
    pub fn total_documents(&self) -> u64 {
        self.tallies.values().map(|t| t.occurrences).sum()
    }

    /// Number of correctly classified test documents.
    pub fn total_correct(&self) -> u64 {
        self.tallies.values().map(|t| t.correct).sum()
    }

    /// Fraction of all test documents classified correctly.
    pub fn overall_accuracy(&self) -> f64 {
        let total = self.total_documents();
        if total == 0 {
            return 0.0;
        }
        self.total_correct() as f64 / total as f64
    }

    /// Mean per-category accuracy over the categories that actually occur in
    /// the test set.
    pub fn average_accuracy(&self) -> f64 {
        let occupied: Vec<&CategoryTally> = self
            .tallies
            .values()
            .filter(|t| t.occurrences > 0)
            .collect();
        if occupied.is_empty() {
            return 0.0;
        }
        occupied.iter().map(|t| t.accuracy()).sum::<f64>() / occupied.len() as f64
    }
}

/// A trained classifier: scores every known category for a document and picks
/// the argmax.
#[derive(Debug, Clone)]
pub struct Classifier {
    model: VocabularyModel,
}

impl Classifier {
    /// Wrap a trained model.
    ///
    /// Fails on a model without categories, since there would be nothing to
    /// choose between.
    pub fn new(model: VocabularyModel) -> Result<Self> {
        if model.is_empty() {
            anyhow::bail!("cannot classify with an untrained model: no categories");
        }
        Ok(Self { model })
    }

    /// The trained model backing this classifier.
    pub fn model(&self) -> &VocabularyModel {
        &self.model
    }

    /// Decide the category for one document.
    ///
    /// Categories are scored in sorted label order and the maximum score
    /// wins; an exact score tie keeps the first (lowest) label. When the raw
    /// scheme zeroes every score, no word carried any evidence, and the
    /// decision falls back to the category with the largest training prior
    /// (lowest label on equal priors). The log-space schemes reach the same
    /// fallback through plain argmax, since a contribution-free score is
    /// exactly the log prior.
    pub fn classify(&self, scheme: Scheme, words: &[String]) -> &str {
        let mut best_label: Option<&str> = None;
        let mut best_score = f64::NEG_INFINITY;
        let mut all_zero = true;

        for (label, _) in self.model.categories() {
            let score = scoring::document_score(&self.model, scheme, label, words);
            if score != 0.0 {
                all_zero = false;
            }
            if best_label.is_none() || score > best_score {
                best_label = Some(label);
                best_score = score;
            }
        }

        if scheme == Scheme::Raw && all_zero {
            return self.largest_prior_category();
        }
        best_label.unwrap_or_default()
    }

    /// The category holding the largest share of training words, lowest label
    /// on ties.
    fn largest_prior_category(&self) -> &str {
        let mut best: Option<(&str, u64)> = None;
        for (label, stats) in self.model.categories() {
            let beats = match best {
                Some((_, best_total)) => stats.total_words() > best_total,
                None => true,
            };
            if beats {
                best = Some((label, stats.total_words()));
            }
        }
        best.map(|(label, _)| label).unwrap_or_default()
    }

    /// Run one scoring scheme over a test set, tallying outcomes per
    /// category.
    ///
    /// Every test document must carry a label the model saw in training.
    /// Evaluation never mutates the model; repeated runs over the same test
    /// set yield identical tallies.
    pub fn evaluate(&self, documents: &[LabeledDocument], scheme: Scheme) -> Result<Evaluation> {
        let mut tallies = self.empty_tallies();
        for document in documents {
            self.tally_document(document, scheme, &mut tallies)?;
        }
        Ok(Evaluation { scheme, tallies })
    }

    /// Parallel [`evaluate`]: documents are scored across rayon workers
    /// against the read-only model, each worker accumulating its own partial
    /// tallies, merged once at the end. Produces exactly the tallies of the
    /// sequential run.
    ///
    /// [`evaluate`]: Classifier::evaluate
    pub fn evaluate_parallel(
        &self,
        documents: &[LabeledDocument],
        scheme: Scheme,
    ) -> Result<Evaluation> {
        let tallies = documents
            .par_iter()
            .try_fold(
                || self.empty_tallies(),
                |mut tallies, document| -> Result<BTreeMap<String, CategoryTally>> {
                    self.tally_document(document, scheme, &mut tallies)?;
                    Ok(tallies)
                },
            )
            .try_reduce(
                || self.empty_tallies(),
                |mut merged, partial| {
                    for (label, tally) in &partial {
                        merged
                            .entry(label.clone())
                            .or_default()
                            .merge(tally);
                    }
                    Ok(merged)
                },
            )?;
        Ok(Evaluation { scheme, tallies })
    }

    fn empty_tallies(&self) -> BTreeMap<String, CategoryTally> {
        self.model
            .categories()
            .map(|(label, _)| (label.to_string(), CategoryTally::default()))
            .collect()
    }

    fn tally_document(
        &self,
        document: &LabeledDocument,
        scheme: Scheme,
        tallies: &mut BTreeMap<String, CategoryTally>,
    ) -> Result<()> {
        let guess = self.classify(scheme, &document.words).to_string();

        let Some(tally) = tallies.get_mut(&document.label) else {
            anyhow::bail!(
                "test document labeled {:?}, which never occurred in training",
                document.label
            );
        };
        tally.occurrences += 1;
        if guess == document.label {
            tally.correct += 1;
        }
        if let Some(tally) = tallies.get_mut(&guess) {
            tally.guesses += 1;
        }
        Ok(())
    }
}
