//! # cadence-classify
//!
//! The per-subject dynamics classifier and the cohort engine.
//!
//! A subject's series is bucketed by a two-pass ratio rule with a fixed 0.8
//! dominance threshold: eubiotic or dysbiotic dominance over all samples
//! yields a "constant" category; eubiotic dominance over non-menses samples
//! alone yields "Menses dysbiotic"; everything else is "Unstable". A pass
//! with nothing to count has no defined ratio and is a typed error, which the
//! cohort engine records as an `Undetermined` sentinel without aborting other
//! subjects.
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{Cst, CstPartition, Dynamics};
//! use cadence_classify::{DynamicsClassifier, Observation, SubjectSeries};
//!
//! let classifier = DynamicsClassifier::new(CstPartition::default_main());
//! let series = SubjectSeries::new(
//!     "S2",
//!     vec![
//!         Observation::new("d1", Cst::I, false),
//!         Observation::new("d2", Cst::III, false),
//!         Observation::new("d3", Cst::III, false),
//!         Observation::new("d4", Cst::III, false),
//!         Observation::new("d5", Cst::III, true),
//!     ],
//! );
//! assert_eq!(classifier.classify(&series).unwrap(), Dynamics::ConstantDysbiotic);
//! ```

pub mod classifier;
pub mod engine;
pub mod error;
pub mod series;

// Re-exports
pub use classifier::{ClassificationPass, DynamicsClassifier, DOMINANCE_THRESHOLD};
pub use engine::{classify_cohort, Assignment, Cohort, SeriesLabel, SubjectDynamics};
pub use error::{ClassifyError, Result};
pub use series::{Observation, SubjectSeries};
