//! Per-word scoring schemes.
//!
//! Each scheme turns one (category, word) pair into a real-valued
//! contribution toward the category's document score. `raw` contributions
//! multiply onto the category prior; `mest` and `tfidf` work in log space and
//! add onto the log of the prior, which keeps long documents away from
//! floating-point underflow. The `raw` scheme is deliberately not
//! underflow-protected and degrades on long documents.
//!
//! All three functions are total: a zero denominator yields a zero
//! contribution instead of a numeric fault.

use std::fmt;
use std::str::FromStr;

use crate::error::AugurError;
use crate::model::{CategoryStats, VocabularyModel};

/// Probability estimation scheme used to score a document against a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Raw relative frequency, multiplied under the category prior.
    Raw,
    /// m-estimate (Laplace-style) smoothing, accumulated in log space.
    MEstimate,
    /// TF-IDF weighted log-likelihood, accumulated in log space.
    TfIdf,
}

impl Scheme {
    /// Every selectable scheme.
    pub const ALL: [Scheme; 3] = [Scheme::Raw, Scheme::MEstimate, Scheme::TfIdf];

    /// The scheme's wire name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Raw => "raw",
            Scheme::MEstimate => "mest",
            Scheme::TfIdf => "tfidf",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = AugurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Scheme::Raw),
            "mest" => Ok(Scheme::MEstimate),
            "tfidf" => Ok(Scheme::TfIdf),
            other => Err(AugurError::invalid_argument(format!(
                "unknown scheme {other:?}, available: raw, mest, tfidf"
            ))),
        }
    }
}

/// Raw conditional probability of `word` given the category.
///
/// Occurrence count over the category's total word count; exactly zero for a
/// word the category never contained. Always in `[0, 1]`.
pub fn raw(stats: &CategoryStats, word: &str) -> f64 {
    let total = stats.total_words();
    if total == 0 {
        return 0.0;
    }
    stats.count(word) as f64 / total as f64
}

/// m-estimate log-probability of `word` given the category.
///
/// `ln((count + 1) / (cat_total + V))` with `V` the global vocabulary size.
/// A word absent from the category falls out of the same formula at
/// `count = 0`.
pub fn m_estimate(stats: &CategoryStats, word: &str, vocabulary_size: usize) -> f64 {
    let denominator = stats.total_words() as f64 + vocabulary_size as f64;
    if denominator == 0.0 {
        return 0.0;
    }
    ((stats.count(word) as f64 + 1.0) / denominator).ln()
}

/// TF-IDF log-likelihood term of `word` given the category.
///
/// `tf` is `(count + 0.1) / cat_total` for a word the category contains and
/// `0.1 / (cat_total + V)` otherwise; `idf` is `ln((C + 2) / df(word))`,
/// falling back to `ln(C + 2)` for words never seen in training. The
/// contribution is `ln(tf * idf)`.
pub fn tf_idf(stats: &CategoryStats, word: &str, model: &VocabularyModel) -> f64 {
    let num_categories = model.num_categories() as f64;
    let idf = match model.document_frequency(word) {
        Some(df) => ((num_categories + 2.0) / df as f64).ln(),
        None => (num_categories + 2.0).ln(),
    };

    let count = stats.count(word);
    let tf = if count > 0 {
        // count > 0 implies a non-zero category total.
        (count as f64 + 0.1) / stats.total_words() as f64
    } else {
        let denominator = stats.total_words() as f64 + model.vocabulary_size() as f64;
        if denominator == 0.0 {
            return 0.0;
        }
        0.1 / denominator
    };

    (tf * idf).ln()
}

/// Score one document against one category under `scheme`.
///
/// The category prior seeds the accumulation: directly for `raw`, as its
/// natural log for the log-space schemes. Every word of the document then
/// contributes per the scheme's formula. Categories unknown to the model
/// score as an impossible outcome.
pub fn document_score(
    model: &VocabularyModel,
    scheme: Scheme,
    label: &str,
    words: &[String],
) -> f64 {
    let Some(stats) = model.category(label) else {
        return match scheme {
            Scheme::Raw => 0.0,
            Scheme::MEstimate | Scheme::TfIdf => f64::NEG_INFINITY,
        };
    };
    let prior = model.prior(label);

    match scheme {
        Scheme::Raw => words.iter().fold(prior, |acc, word| acc * raw(stats, word)),
        Scheme::MEstimate => words.iter().fold(prior.ln(), |acc, word| {
            acc + m_estimate(stats, word, model.vocabulary_size())
        }),
        Scheme::TfIdf => words
            .iter()
            .fold(prior.ln(), |acc, word| acc + tf_idf(stats, word, model)),
    }
}
