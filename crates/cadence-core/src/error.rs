//! Configuration errors.
//!
//! A bad partition is fatal: classification must not start until the
//! eubiotic/dysbiotic sets are known to exactly cover the active universe.

use thiserror::Error;

use crate::labels::{CstMode, ParseLabelError};

/// Errors raised while validating the eubiotic/dysbiotic configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A label was listed as both eubiotic and dysbiotic.
    #[error("{mode} labels listed as both eubiotic and dysbiotic: {labels}")]
    OverlappingLabels { mode: CstMode, labels: String },

    /// The union of the two sets does not cover the universe.
    #[error("eubiotic and dysbiotic sets do not cover every {mode} label; missing: {missing}")]
    IncompletePartition { mode: CstMode, missing: String },

    /// A configured label is not part of the active universe.
    #[error(transparent)]
    UnknownLabel(#[from] ParseLabelError),
}

/// Result type alias using [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
