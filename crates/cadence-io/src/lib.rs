//! # cadence-io
//!
//! CSV ingestion and output writing for the cadence dynamics classifier.
//!
//! Two input tables are read: the VALENCIA output (`sampleID`, `CST`, and in
//! subtype mode `subCST`) and the sample metadata (`sampleID`, `subjectID`,
//! `menses`). Label text is parsed into the closed enums from
//! [`cadence_core`] at ingestion; required columns are checked before any row
//! is read. The single output table maps each subject to its dynamics label.

pub mod error;
pub mod tables;
pub mod writer;

// Re-exports
pub use error::{InputError, Result};
pub use tables::{
    CstRecord, MetadataRecord, MetadataTable, ValenciaTable, METADATA_TABLE, VALENCIA_TABLE,
};
pub use writer::write_dynamics;
