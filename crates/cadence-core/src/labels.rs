//! Closed CST label universes.
//!
//! VALENCIA assigns every sample one of seven main community state types and,
//! optionally, one of fourteen subtypes. Both universes are modeled as closed
//! enums with a total parse function: raw text either maps to a known label or
//! is rejected at ingestion, so an unrecognized label can never drift through
//! the counting stage unmatched.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use thiserror::Error;

/// Which label column drives classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CstMode {
    /// The seven main community state types (`CST` column).
    MainTypes,
    /// The fourteen subtypes (`subCST` column).
    Subtypes,
}

impl CstMode {
    /// Name of the table column carrying labels for this mode.
    pub fn column(&self) -> &'static str {
        match self {
            Self::MainTypes => "CST",
            Self::Subtypes => "subCST",
        }
    }
}

impl fmt::Display for CstMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// A label that is not part of the active universe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {mode} label {label:?}")]
pub struct ParseLabelError {
    label: String,
    mode: CstMode,
}

impl ParseLabelError {
    fn new(label: &str, mode: CstMode) -> Self {
        Self {
            label: label.to_owned(),
            mode,
        }
    }

    /// The offending raw text.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Common interface over the two label universes.
///
/// Lets the partition and the classifier be written once and instantiated for
/// either main types or subtypes.
pub trait CstLabel:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ParseLabelError>
    + Send
    + Sync
    + 'static
{
    /// Every label of this universe, in canonical order.
    const UNIVERSE: &'static [Self];

    /// The mode this universe belongs to.
    const MODE: CstMode;

    /// Canonical text form, as it appears in VALENCIA output.
    fn as_str(&self) -> &'static str;
}

/// Main community state types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cst {
    I,
    II,
    III,
    IvA,
    IvB,
    IvC,
    V,
}

impl CstLabel for Cst {
    const UNIVERSE: &'static [Self] = &[
        Self::I,
        Self::II,
        Self::III,
        Self::IvA,
        Self::IvB,
        Self::IvC,
        Self::V,
    ];

    const MODE: CstMode = CstMode::MainTypes;

    fn as_str(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IvA => "IV-A",
            Self::IvB => "IV-B",
            Self::IvC => "IV-C",
            Self::V => "V",
        }
    }
}

impl FromStr for Cst {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "I" => Ok(Self::I),
            "II" => Ok(Self::II),
            "III" => Ok(Self::III),
            "IV-A" => Ok(Self::IvA),
            "IV-B" => Ok(Self::IvB),
            "IV-C" => Ok(Self::IvC),
            "V" => Ok(Self::V),
            other => Err(ParseLabelError::new(other, CstMode::MainTypes)),
        }
    }
}

impl fmt::Display for Cst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CST subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubCst {
    IA,
    IB,
    IIA,
    IIB,
    IIIA,
    IIIB,
    IvA,
    IvB,
    IvC0,
    IvC1,
    IvC2,
    IvC3,
    IvC4,
    V,
}

impl CstLabel for SubCst {
    const UNIVERSE: &'static [Self] = &[
        Self::IA,
        Self::IB,
        Self::IIA,
        Self::IIB,
        Self::IIIA,
        Self::IIIB,
        Self::IvA,
        Self::IvB,
        Self::IvC0,
        Self::IvC1,
        Self::IvC2,
        Self::IvC3,
        Self::IvC4,
        Self::V,
    ];

    const MODE: CstMode = CstMode::Subtypes;

    fn as_str(&self) -> &'static str {
        match self {
            Self::IA => "I-A",
            Self::IB => "I-B",
            Self::IIA => "II-A",
            Self::IIB => "II-B",
            Self::IIIA => "III-A",
            Self::IIIB => "III-B",
            Self::IvA => "IV-A",
            Self::IvB => "IV-B",
            Self::IvC0 => "IV-C0",
            Self::IvC1 => "IV-C1",
            Self::IvC2 => "IV-C2",
            Self::IvC3 => "IV-C3",
            Self::IvC4 => "IV-C4",
            Self::V => "V",
        }
    }
}

impl FromStr for SubCst {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "I-A" => Ok(Self::IA),
            "I-B" => Ok(Self::IB),
            "II-A" => Ok(Self::IIA),
            "II-B" => Ok(Self::IIB),
            "III-A" => Ok(Self::IIIA),
            "III-B" => Ok(Self::IIIB),
            "IV-A" => Ok(Self::IvA),
            "IV-B" => Ok(Self::IvB),
            "IV-C0" => Ok(Self::IvC0),
            "IV-C1" => Ok(Self::IvC1),
            "IV-C2" => Ok(Self::IvC2),
            "IV-C3" => Ok(Self::IvC3),
            "IV-C4" => Ok(Self::IvC4),
            "V" => Ok(Self::V),
            other => Err(ParseLabelError::new(other, CstMode::Subtypes)),
        }
    }
}

impl fmt::Display for SubCst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_types_round_trip() {
        for label in Cst::UNIVERSE {
            assert_eq!(label.as_str().parse::<Cst>().unwrap(), *label);
        }
    }

    #[test]
    fn subtypes_round_trip() {
        for label in SubCst::UNIVERSE {
            assert_eq!(label.as_str().parse::<SubCst>().unwrap(), *label);
        }
    }

    #[test]
    fn universe_sizes() {
        assert_eq!(Cst::UNIVERSE.len(), 7);
        assert_eq!(SubCst::UNIVERSE.len(), 14);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(" IV-A ".parse::<Cst>().unwrap(), Cst::IvA);
        assert_eq!("IV-C2\n".parse::<SubCst>().unwrap(), SubCst::IvC2);
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert!("IV-D".parse::<Cst>().is_err());
        assert!("VI".parse::<Cst>().is_err());
        assert!("".parse::<Cst>().is_err());
        // Subtype text is not a valid main type and vice versa.
        assert!("I-A".parse::<Cst>().is_err());
        assert!("I".parse::<SubCst>().is_err());
    }

    #[test]
    fn parse_error_reports_mode_column() {
        let err = "IV-D".parse::<Cst>().unwrap_err();
        assert_eq!(err.to_string(), "unrecognized CST label \"IV-D\"");
        let err = "IV-D".parse::<SubCst>().unwrap_err();
        assert_eq!(err.to_string(), "unrecognized subCST label \"IV-D\"");
    }
}
