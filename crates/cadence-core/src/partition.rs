//! Eubiotic/dysbiotic partition of a CST universe.
//!
//! Classification needs the active universe split into two camps: labels that
//! mark a healthy community state and labels that mark an unhealthy one. A
//! [`CstPartition`] is only ever constructed through validation: the two sets
//! must be disjoint and together cover the whole universe, so every counted
//! sample lands in exactly one camp.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{ConfigError, Result};
use crate::labels::{Cst, CstLabel, SubCst};

/// Latest validated default split of the main-type universe.
pub const MAIN_EUBIOTIC_DEFAULT: &[Cst] = &[Cst::I, Cst::II, Cst::V];
pub const MAIN_DYSBIOTIC_DEFAULT: &[Cst] = &[Cst::III, Cst::IvA, Cst::IvB, Cst::IvC];

/// The main-type defaults projected onto subtypes.
pub const SUBTYPE_EUBIOTIC_DEFAULT: &[SubCst] = &[
    SubCst::IA,
    SubCst::IB,
    SubCst::IIA,
    SubCst::IIB,
    SubCst::V,
];
pub const SUBTYPE_DYSBIOTIC_DEFAULT: &[SubCst] = &[
    SubCst::IIIA,
    SubCst::IIIB,
    SubCst::IvA,
    SubCst::IvB,
    SubCst::IvC0,
    SubCst::IvC1,
    SubCst::IvC2,
    SubCst::IvC3,
    SubCst::IvC4,
];

/// A validated eubiotic/dysbiotic split of one label universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CstPartition<L: CstLabel> {
    eubiotic: BTreeSet<L>,
    dysbiotic: BTreeSet<L>,
}

impl<L: CstLabel> CstPartition<L> {
    /// Validates the two sets and returns them unchanged on success.
    ///
    /// Fails if any label appears in both sets, or if their union does not
    /// cover the whole universe. Out-of-universe labels are unrepresentable
    /// here; raw text is rejected earlier, in [`parse_label_list`] or at
    /// table ingestion.
    pub fn new(eubiotic: BTreeSet<L>, dysbiotic: BTreeSet<L>) -> Result<Self> {
        let overlap: Vec<&L> = eubiotic.intersection(&dysbiotic).collect();
        if !overlap.is_empty() {
            return Err(ConfigError::OverlappingLabels {
                mode: L::MODE,
                labels: join_labels(overlap.into_iter()),
            });
        }

        let missing: Vec<&L> = L::UNIVERSE
            .iter()
            .filter(|label| !eubiotic.contains(label) && !dysbiotic.contains(label))
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::IncompletePartition {
                mode: L::MODE,
                missing: join_labels(missing.into_iter()),
            });
        }

        Ok(Self {
            eubiotic,
            dysbiotic,
        })
    }

    pub fn eubiotic(&self) -> &BTreeSet<L> {
        &self.eubiotic
    }

    pub fn dysbiotic(&self) -> &BTreeSet<L> {
        &self.dysbiotic
    }

    pub fn is_eubiotic(&self, label: &L) -> bool {
        self.eubiotic.contains(label)
    }

    pub fn is_dysbiotic(&self, label: &L) -> bool {
        self.dysbiotic.contains(label)
    }
}

impl CstPartition<Cst> {
    /// Default main-type partition: eubiotic `{I, II, V}`, dysbiotic
    /// `{III, IV-A, IV-B, IV-C}`.
    pub fn default_main() -> Self {
        // Known-complete split of the universe; covered by a unit test.
        Self {
            eubiotic: MAIN_EUBIOTIC_DEFAULT.iter().copied().collect(),
            dysbiotic: MAIN_DYSBIOTIC_DEFAULT.iter().copied().collect(),
        }
    }
}

impl CstPartition<SubCst> {
    /// Default subtype partition, the main-type defaults spread over
    /// subtypes: eubiotic `{I-A, I-B, II-A, II-B, V}`, everything else
    /// dysbiotic.
    pub fn default_subtypes() -> Self {
        Self {
            eubiotic: SUBTYPE_EUBIOTIC_DEFAULT.iter().copied().collect(),
            dysbiotic: SUBTYPE_DYSBIOTIC_DEFAULT.iter().copied().collect(),
        }
    }
}

impl<L: CstLabel> fmt::Display for CstPartition<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "eubiotic: {}; dysbiotic: {}",
            join_labels(self.eubiotic.iter()),
            join_labels(self.dysbiotic.iter()),
        )
    }
}

/// Builder for assembling a partition incrementally before validation.
pub struct CstPartitionBuilder<L: CstLabel> {
    eubiotic: BTreeSet<L>,
    dysbiotic: BTreeSet<L>,
}

impl<L: CstLabel> CstPartitionBuilder<L> {
    pub fn new() -> Self {
        Self {
            eubiotic: BTreeSet::new(),
            dysbiotic: BTreeSet::new(),
        }
    }

    /// Adds labels to the eubiotic set.
    pub fn eubiotic<I: IntoIterator<Item = L>>(mut self, labels: I) -> Self {
        self.eubiotic.extend(labels);
        self
    }

    /// Adds labels to the dysbiotic set.
    pub fn dysbiotic<I: IntoIterator<Item = L>>(mut self, labels: I) -> Self {
        self.dysbiotic.extend(labels);
        self
    }

    /// Parses a comma-separated list into the eubiotic set.
    pub fn eubiotic_list(mut self, list: &str) -> Result<Self> {
        self.eubiotic.extend(parse_label_list::<L>(list)?);
        Ok(self)
    }

    /// Parses a comma-separated list into the dysbiotic set.
    pub fn dysbiotic_list(mut self, list: &str) -> Result<Self> {
        self.dysbiotic.extend(parse_label_list::<L>(list)?);
        Ok(self)
    }

    /// Validates and builds the partition.
    pub fn build(self) -> Result<CstPartition<L>> {
        CstPartition::new(self.eubiotic, self.dysbiotic)
    }
}

impl<L: CstLabel> Default for CstPartitionBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a comma-separated label list, e.g. `"I,II,V"`.
///
/// Unknown labels fail with the offending text; duplicates collapse.
pub fn parse_label_list<L: CstLabel>(list: &str) -> Result<BTreeSet<L>> {
    list.split(',')
        .map(|token| token.parse::<L>().map_err(ConfigError::from))
        .collect()
}

fn join_labels<'a, L: CstLabel + 'a>(labels: impl Iterator<Item = &'a L>) -> String {
    labels
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_partitions_pass_validation() {
        let main = CstPartition::default_main();
        CstPartition::new(main.eubiotic().clone(), main.dysbiotic().clone()).unwrap();

        let sub = CstPartition::default_subtypes();
        CstPartition::new(sub.eubiotic().clone(), sub.dysbiotic().clone()).unwrap();
    }

    #[test]
    fn overlapping_sets_are_rejected() {
        let eubiotic: BTreeSet<Cst> = [Cst::I, Cst::II, Cst::III, Cst::V].into_iter().collect();
        let dysbiotic: BTreeSet<Cst> = [Cst::III, Cst::IvA, Cst::IvB, Cst::IvC]
            .into_iter()
            .collect();
        let err = CstPartition::new(eubiotic, dysbiotic).unwrap_err();
        assert!(matches!(err, ConfigError::OverlappingLabels { .. }));
        assert!(err.to_string().contains("III"));
    }

    #[test]
    fn incomplete_union_is_rejected() {
        let eubiotic: BTreeSet<Cst> = [Cst::I, Cst::II].into_iter().collect();
        let dysbiotic: BTreeSet<Cst> = [Cst::III, Cst::IvA, Cst::IvB, Cst::IvC]
            .into_iter()
            .collect();
        let err = CstPartition::new(eubiotic, dysbiotic).unwrap_err();
        match err {
            ConfigError::IncompletePartition { missing, .. } => assert_eq!(missing, "V"),
            other => panic!("expected IncompletePartition, got {other:?}"),
        }
    }

    #[test]
    fn builder_accepts_the_spec_example() {
        let partition = CstPartitionBuilder::<Cst>::new()
            .eubiotic_list("I,II,V")
            .unwrap()
            .dysbiotic_list("III,IV-A,IV-B,IV-C")
            .unwrap()
            .build()
            .unwrap();
        assert!(partition.is_eubiotic(&Cst::I));
        assert!(partition.is_dysbiotic(&Cst::IvC));
    }

    #[test]
    fn label_list_rejects_unknown_labels() {
        let err = parse_label_list::<Cst>("I,II,IV-D").unwrap_err();
        assert!(err.to_string().contains("IV-D"));
    }

    #[test]
    fn label_list_tolerates_spaces_and_duplicates() {
        let set = parse_label_list::<Cst>("I, II ,I").unwrap();
        assert_eq!(set.len(), 2);
    }
}
