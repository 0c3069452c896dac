//! Reading labeled, line-oriented corpora.
//!
//! A corpus file holds one document per line. The first whitespace-delimited
//! token of a line is the document's category label; the remaining tokens are
//! its words. Tokens are opaque strings: no case folding, no punctuation
//! stripping, the file's exact whitespace split is the contract.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// A single labeled document: a category label plus its word tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledDocument {
    /// Category label of the document.
    pub label: String,
    /// Word tokens of the document, in file order. May be empty.
    pub words: Vec<String>,
}

impl LabeledDocument {
    /// Create a labeled document from a label and word tokens.
    pub fn new<S: Into<String>>(label: S, words: Vec<String>) -> Self {
        Self {
            label: label.into(),
            words,
        }
    }
}

/// Parse a single corpus line into a labeled document.
///
/// The first token becomes the label; everything after it the words. A line
/// holding only a label yields an empty word sequence. Blank lines carry no
/// label and yield `None`.
pub fn parse_line(line: &str) -> Option<LabeledDocument> {
    let mut tokens = line.split_whitespace();
    let label = tokens.next()?.to_string();
    let words = tokens.map(str::to_string).collect();
    Some(LabeledDocument { label, words })
}

/// Read every labeled document from a corpus file.
///
/// I/O failures (missing file, unreadable data) surface as errors; no
/// recovery is attempted.
pub fn read_labeled_file<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledDocument>> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut documents = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(document) = parse_line(&line) {
            documents.push(document);
        }
    }

    Ok(documents)
}
