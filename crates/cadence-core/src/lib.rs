//! # cadence-core
//!
//! Domain types for the cadence dynamics classifier: the closed CST label
//! universes, the validated eubiotic/dysbiotic partition, and the four
//! dynamics categories.
//!
//! The two label universes are fixed. Main types:
//! `I, II, III, IV-A, IV-B, IV-C, V`. Subtypes:
//! `I-A, I-B, II-A, II-B, III-A, III-B, IV-A, IV-B, IV-C0..IV-C4, V`.
//! A partition is accepted only when its two sets are disjoint and together
//! cover the active universe exactly.
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{Cst, CstPartitionBuilder};
//!
//! let partition = CstPartitionBuilder::<Cst>::new()
//!     .eubiotic_list("I,II,V")?
//!     .dysbiotic_list("III,IV-A,IV-B,IV-C")?
//!     .build()?;
//!
//! assert!(partition.is_eubiotic(&Cst::I));
//! # Ok::<(), cadence_core::ConfigError>(())
//! ```

pub mod dynamics;
pub mod error;
pub mod labels;
pub mod partition;

// Re-exports
pub use dynamics::Dynamics;
pub use error::{ConfigError, Result};
pub use labels::{Cst, CstLabel, CstMode, ParseLabelError, SubCst};
pub use partition::{
    parse_label_list, CstPartition, CstPartitionBuilder, MAIN_DYSBIOTIC_DEFAULT,
    MAIN_EUBIOTIC_DEFAULT, SUBTYPE_DYSBIOTIC_DEFAULT, SUBTYPE_EUBIOTIC_DEFAULT,
};
