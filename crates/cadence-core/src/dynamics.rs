//! The four per-subject dynamics categories.

use std::fmt;

/// Longitudinal stability pattern of one subject's time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dynamics {
    /// At least 80% of all samples carry a eubiotic label.
    ConstantEubiotic,
    /// At least 80% of all samples carry a dysbiotic label.
    ConstantDysbiotic,
    /// Neither regime dominates overall, but the non-menses samples are at
    /// least 80% eubiotic; the instability is attributed to menses.
    MensesDysbiotic,
    /// No regime dominates, with or without menses samples.
    Unstable,
}

impl Dynamics {
    /// Label text as written to the output table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConstantEubiotic => "Constant eubiotic",
            Self::ConstantDysbiotic => "Constant dysbiotic",
            Self::MensesDysbiotic => "Menses dysbiotic",
            Self::Unstable => "Unstable",
        }
    }
}

impl fmt::Display for Dynamics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_labels_match_the_historical_text() {
        assert_eq!(Dynamics::ConstantEubiotic.to_string(), "Constant eubiotic");
        assert_eq!(Dynamics::ConstantDysbiotic.to_string(), "Constant dysbiotic");
        assert_eq!(Dynamics::MensesDysbiotic.to_string(), "Menses dysbiotic");
        assert_eq!(Dynamics::Unstable.to_string(), "Unstable");
    }
}
