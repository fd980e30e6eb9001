//! Per-subject classification errors.
//!
//! These are scoped to one subject: the cohort engine records the subject as
//! undetermined and keeps going, so a single degenerate series never aborts
//! the rest of the run.

use thiserror::Error;

use crate::classifier::ClassificationPass;

/// Errors raised while classifying a single subject.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// A pass had no eubiotic or dysbiotic samples to count.
    #[error("subject {subject:?} has no eubiotic or dysbiotic samples over {pass}; dynamics ratio is undefined")]
    UndefinedRatio {
        subject: String,
        pass: ClassificationPass,
    },
}

/// Result type alias using [`ClassifyError`].
pub type Result<T> = std::result::Result<T, ClassifyError>;
