//! The two-pass ratio rule.
//!
//! Pass 1 looks at the whole series: if either regime holds at least 80% of
//! the counted samples, the subject is constant in that regime, with the
//! eubiotic check strictly first. Otherwise pass 2 recomputes the eubiotic
//! ratio over non-menses samples only: dominance there means the instability
//! is attributed to menses; anything else is genuinely unstable.

use std::collections::HashMap;
use std::fmt;

use cadence_core::{CstLabel, CstPartition, Dynamics};

use crate::error::{ClassifyError, Result};
use crate::series::{Observation, SubjectSeries};

/// Ratio at which one regime counts as dominating a series.
pub const DOMINANCE_THRESHOLD: f64 = 0.8;

/// Which sample selection a ratio was computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationPass {
    /// Pass 1, over every sample of the subject.
    AllSamples,
    /// Pass 2, restricted to samples with `menses == 0`.
    NonMenses,
}

impl fmt::Display for ClassificationPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllSamples => f.write_str("all samples"),
            Self::NonMenses => f.write_str("non-menses samples"),
        }
    }
}

/// Assigns one of the four dynamics categories to a subject's series.
#[derive(Debug, Clone)]
pub struct DynamicsClassifier<L: CstLabel> {
    partition: CstPartition<L>,
}

impl<L: CstLabel> DynamicsClassifier<L> {
    pub fn new(partition: CstPartition<L>) -> Self {
        Self { partition }
    }

    pub fn partition(&self) -> &CstPartition<L> {
        &self.partition
    }

    /// Classifies one subject.
    ///
    /// Errors when a pass has no eubiotic or dysbiotic samples to count
    /// (empty series, or pass 2 with every sample taken during menses); the
    /// ratio is undefined there and never silently substituted.
    pub fn classify(&self, series: &SubjectSeries<L>) -> Result<Dynamics> {
        let (eubio, dysbio) = self.regime_counts(series.observations().iter());
        let (eu_rate, dys_rate) =
            rates(eubio, dysbio).ok_or_else(|| ClassifyError::UndefinedRatio {
                subject: series.subject_id().to_owned(),
                pass: ClassificationPass::AllSamples,
            })?;

        if eu_rate >= DOMINANCE_THRESHOLD {
            return Ok(Dynamics::ConstantEubiotic);
        }
        if dys_rate >= DOMINANCE_THRESHOLD {
            return Ok(Dynamics::ConstantDysbiotic);
        }

        let (eubio, dysbio) =
            self.regime_counts(series.observations().iter().filter(|obs| !obs.menses));
        let (eu_rate, _) = rates(eubio, dysbio).ok_or_else(|| ClassifyError::UndefinedRatio {
            subject: series.subject_id().to_owned(),
            pass: ClassificationPass::NonMenses,
        })?;

        if eu_rate >= DOMINANCE_THRESHOLD {
            Ok(Dynamics::MensesDysbiotic)
        } else {
            Ok(Dynamics::Unstable)
        }
    }

    /// Groups the selection by label and sums the counts falling in each
    /// regime.
    fn regime_counts<'a>(
        &self,
        observations: impl Iterator<Item = &'a Observation<L>>,
    ) -> (usize, usize) {
        let mut counts: HashMap<L, usize> = HashMap::new();
        for obs in observations {
            *counts.entry(obs.label).or_insert(0) += 1;
        }

        let eubio = counts
            .iter()
            .filter(|(label, _)| self.partition.is_eubiotic(label))
            .map(|(_, count)| count)
            .sum();
        let dysbio = counts
            .iter()
            .filter(|(label, _)| self.partition.is_dysbiotic(label))
            .map(|(_, count)| count)
            .sum();
        (eubio, dysbio)
    }
}

fn rates(eubio: usize, dysbio: usize) -> Option<(f64, f64)> {
    let total = eubio + dysbio;
    if total == 0 {
        return None;
    }
    Some((eubio as f64 / total as f64, dysbio as f64 / total as f64))
}
