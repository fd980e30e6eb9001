//! Errors reading or writing the CSV tables.
//!
//! All of these are fatal: a malformed table aborts the run before any
//! output is written. Join mismatches between the two tables are not errors;
//! they are reported as warnings at assembly time.

use thiserror::Error;

use cadence_core::ParseLabelError;

/// Errors raised while ingesting the VALENCIA or metadata table, or while
/// writing the output table.
#[derive(Error, Debug)]
pub enum InputError {
    /// Underlying file I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from a table header.
    #[error("{table} table is missing required column {column:?}")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    /// A label value is not part of the expected universe.
    #[error("sample {sample:?}: {source}")]
    UnknownLabel {
        sample: String,
        source: ParseLabelError,
    },

    /// Subtype mode is active but a sample has no subCST value.
    #[error("sample {sample:?} has no subCST value, required in subtype mode")]
    MissingSubtype { sample: String },

    /// The menses flag is neither 0 nor 1.
    #[error("sample {sample:?}: menses must be 0 or 1, got {value:?}")]
    InvalidMenses { sample: String, value: String },
}

/// Result type alias using [`InputError`].
pub type Result<T> = std::result::Result<T, InputError>;
