//! A subject's joined time series, the classifier's input.

use cadence_core::CstLabel;

/// One sample of a subject's series: its label and menses flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation<L: CstLabel> {
    pub sample_id: String,
    pub label: L,
    pub menses: bool,
}

impl<L: CstLabel> Observation<L> {
    pub fn new(sample_id: impl Into<String>, label: L, menses: bool) -> Self {
        Self {
            sample_id: sample_id.into(),
            label,
            menses,
        }
    }
}

/// All observations belonging to one subject.
///
/// Classification depends only on the multiset of labels (and the menses
/// flags for the fallback pass); observation order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectSeries<L: CstLabel> {
    subject_id: String,
    observations: Vec<Observation<L>>,
}

impl<L: CstLabel> SubjectSeries<L> {
    pub fn new(subject_id: impl Into<String>, observations: Vec<Observation<L>>) -> Self {
        Self {
            subject_id: subject_id.into(),
            observations,
        }
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn observations(&self) -> &[Observation<L>] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
