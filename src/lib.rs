//! # CADENCE
//!
//! Classifies longitudinal vaginal microbiome time series into dynamics
//! categories, given per-sample community state type (CST) assignments from
//! VALENCIA and per-subject sample metadata.
//!
//! Each subject is bucketed into one of four outcomes by a two-pass ratio
//! rule: a series dominated (>= 80%) by eubiotic or dysbiotic CSTs across all
//! samples is "Constant eubiotic" / "Constant dysbiotic"; a series that is
//! only eubiotic-dominated once menses samples are excluded is
//! "Menses dysbiotic"; anything else is "Unstable".
//!
//! This facade re-exports the member crates:
//!
//! - [`cadence_core`] — CST label universes, eubiotic/dysbiotic partition
//!   configuration and validation, dynamics labels
//! - [`cadence_io`] — CSV ingestion of the VALENCIA and metadata tables,
//!   output writing
//! - [`cadence_classify`] — the per-subject classifier and cohort engine
//!
//! # Example
//!
//! ```rust
//! use cadence::{Cst, CstPartition, DynamicsClassifier, Dynamics};
//! use cadence::{Observation, SubjectSeries};
//!
//! let partition = CstPartition::default_main();
//! let classifier = DynamicsClassifier::new(partition);
//!
//! let series = SubjectSeries::new(
//!     "S1",
//!     vec![
//!         Observation::new("d1", Cst::I, false),
//!         Observation::new("d2", Cst::I, false),
//!         Observation::new("d3", Cst::I, false),
//!         Observation::new("d4", Cst::I, true),
//!         Observation::new("d5", Cst::III, false),
//!     ],
//! );
//!
//! assert_eq!(classifier.classify(&series).unwrap(), Dynamics::ConstantEubiotic);
//! ```

pub use cadence_core::{
    ConfigError, Cst, CstLabel, CstMode, CstPartition, CstPartitionBuilder, Dynamics,
    ParseLabelError, SubCst,
};

pub use cadence_io::{
    write_dynamics, CstRecord, InputError, MetadataRecord, MetadataTable, ValenciaTable,
};

pub use cadence_classify::{
    classify_cohort, Assignment, ClassificationPass, ClassifyError, Cohort, DynamicsClassifier,
    Observation, SeriesLabel, SubjectDynamics, SubjectSeries,
};
