//! Cohort assembly and batch classification.
//!
//! Joins the VALENCIA and metadata tables into per-subject series, then maps
//! the classifier over every subject in metadata first-appearance order.
//! Subjects are independent; with the `parallel` feature the map runs on a
//! rayon pool, and the ordered collect keeps results deterministic either
//! way.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::{debug, warn};

use cadence_core::{Cst, CstLabel, Dynamics, SubCst};
use cadence_io::{CstRecord, InputError, MetadataTable, ValenciaTable};

use crate::classifier::DynamicsClassifier;
use crate::series::{Observation, SubjectSeries};

/// A universe whose labels can be read off a joined VALENCIA record.
pub trait SeriesLabel: CstLabel {
    /// Extracts this universe's label from a record, if present.
    fn select(record: &CstRecord) -> Option<Self>;
}

impl SeriesLabel for Cst {
    fn select(record: &CstRecord) -> Option<Self> {
        Some(record.cst)
    }
}

impl SeriesLabel for SubCst {
    fn select(record: &CstRecord) -> Option<Self> {
        record.sub_cst
    }
}

/// Per-subject series for a whole study, in output row order.
#[derive(Debug, Clone)]
pub struct Cohort<L: CstLabel> {
    series: Vec<SubjectSeries<L>>,
}

impl<L: SeriesLabel> Cohort<L> {
    /// Joins the two tables on `sampleID`.
    ///
    /// Samples present in only one table are counted, reported as warnings,
    /// and excluded; a metadata subject whose samples all go missing still
    /// gets a (then empty) series, so it surfaces downstream as undetermined
    /// rather than silently vanishing from the output.
    pub fn assemble(
        valencia: &ValenciaTable,
        metadata: &MetadataTable,
    ) -> cadence_io::Result<Self> {
        let mut by_subject: HashMap<&str, Vec<Observation<L>>> = HashMap::new();
        let mut matched: HashSet<&str> = HashSet::new();
        let mut missing_from_valencia = 0usize;

        for record in metadata.records() {
            let Some(cst_record) = valencia.get(&record.sample_id) else {
                missing_from_valencia += 1;
                continue;
            };
            matched.insert(cst_record.sample_id.as_str());
            let Some(label) = L::select(cst_record) else {
                return Err(InputError::MissingSubtype {
                    sample: record.sample_id.clone(),
                });
            };
            by_subject
                .entry(record.subject_id.as_str())
                .or_default()
                .push(Observation::new(record.sample_id.clone(), label, record.menses));
        }

        if missing_from_valencia > 0 {
            warn!(
                count = missing_from_valencia,
                "metadata samples absent from the VALENCIA table were excluded"
            );
        }
        let unmatched = valencia.len() - matched.len();
        if unmatched > 0 {
            warn!(
                count = unmatched,
                "VALENCIA samples without metadata were excluded"
            );
        }

        let series = metadata
            .subjects()
            .iter()
            .map(|subject| {
                SubjectSeries::new(
                    subject.clone(),
                    by_subject.remove(subject.as_str()).unwrap_or_default(),
                )
            })
            .collect();
        Ok(Self { series })
    }
}

impl<L: CstLabel> Cohort<L> {
    pub fn series(&self) -> &[SubjectSeries<L>] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Outcome recorded for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// The classifier produced one of the four dynamics categories.
    Classified(Dynamics),
    /// The subject's ratio was undefined; recorded as a sentinel instead of
    /// aborting the run.
    Undetermined,
}

impl Assignment {
    /// Label text as written to the output table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classified(dynamics) => dynamics.as_str(),
            Self::Undetermined => "Undetermined",
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output row: a subject and its assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectDynamics {
    pub subject_id: String,
    pub assignment: Assignment,
}

/// Classifies every subject of the cohort, in cohort order.
///
/// Per-subject failures are localized: an undefined ratio is logged and
/// recorded as [`Assignment::Undetermined`], and every other subject is still
/// classified.
pub fn classify_cohort<L: CstLabel>(
    classifier: &DynamicsClassifier<L>,
    cohort: &Cohort<L>,
) -> Vec<SubjectDynamics> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        cohort
            .series()
            .par_iter()
            .map(|series| assign(classifier, series))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        cohort
            .series()
            .iter()
            .map(|series| assign(classifier, series))
            .collect()
    }
}

fn assign<L: CstLabel>(
    classifier: &DynamicsClassifier<L>,
    series: &SubjectSeries<L>,
) -> SubjectDynamics {
    match classifier.classify(series) {
        Ok(dynamics) => {
            debug!(subject = %series.subject_id(), %dynamics, samples = series.len(), "classified");
            SubjectDynamics {
                subject_id: series.subject_id().to_owned(),
                assignment: Assignment::Classified(dynamics),
            }
        }
        Err(err) => {
            warn!(subject = %series.subject_id(), %err, "dynamics undetermined");
            SubjectDynamics {
                subject_id: series.subject_id().to_owned(),
                assignment: Assignment::Undetermined,
            }
        }
    }
}
