//! Classification over a trained vocabulary model.

pub mod classifier;
pub mod scoring;

// Re-export commonly used types
pub use classifier::{CategoryTally, Classifier, Evaluation};
pub use scoring::Scheme;
