//! Typed ingestion of the two input tables.
//!
//! Both tables are comma-separated with a header row. Required columns are
//! checked up front so a missing column fails with its name instead of a
//! per-row deserialization error, and label text is parsed into the closed
//! enums at ingestion so unknown labels cannot reach the counting stage.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use cadence_core::{Cst, CstMode, SubCst};

use crate::error::{InputError, Result};

/// Table names used in error messages.
pub const VALENCIA_TABLE: &str = "VALENCIA";
pub const METADATA_TABLE: &str = "metadata";

/// One row of the VALENCIA output, with labels already parsed.
///
/// `sub_cst` is populated only in subtype mode; in main-type mode the
/// `subCST` column is ignored entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CstRecord {
    pub sample_id: String,
    pub cst: Cst,
    pub sub_cst: Option<SubCst>,
}

/// One row of the metadata table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub sample_id: String,
    pub subject_id: String,
    pub menses: bool,
}

#[derive(Debug, Deserialize)]
struct RawCstRow {
    #[serde(rename = "sampleID")]
    sample_id: String,
    #[serde(rename = "CST")]
    cst: String,
    #[serde(rename = "subCST", default)]
    sub_cst: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMetadataRow {
    #[serde(rename = "sampleID")]
    sample_id: String,
    #[serde(rename = "subjectID")]
    subject_id: String,
    menses: String,
}

/// The VALENCIA output table, indexed by sample ID.
#[derive(Debug, Clone)]
pub struct ValenciaTable {
    records: Vec<CstRecord>,
    index: HashMap<String, usize>,
}

impl ValenciaTable {
    pub fn from_path(path: &Path, mode: CstMode) -> Result<Self> {
        Self::read(csv::Reader::from_path(path)?, mode)
    }

    pub fn from_reader<R: Read>(reader: R, mode: CstMode) -> Result<Self> {
        Self::read(csv::Reader::from_reader(reader), mode)
    }

    fn read<R: Read>(mut reader: csv::Reader<R>, mode: CstMode) -> Result<Self> {
        let headers = reader.headers()?.clone();
        require_columns(&headers, VALENCIA_TABLE, &["sampleID", "CST"])?;
        if mode == CstMode::Subtypes {
            require_columns(&headers, VALENCIA_TABLE, &["subCST"])?;
        }

        let mut records = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for row in reader.deserialize() {
            let raw: RawCstRow = row?;
            let cst = raw
                .cst
                .parse::<Cst>()
                .map_err(|source| InputError::UnknownLabel {
                    sample: raw.sample_id.clone(),
                    source,
                })?;
            let sub_cst = match mode {
                CstMode::MainTypes => None,
                CstMode::Subtypes => match raw.sub_cst.as_deref().map(str::trim) {
                    None | Some("") => {
                        return Err(InputError::MissingSubtype {
                            sample: raw.sample_id,
                        })
                    }
                    Some(text) => {
                        Some(
                            text.parse::<SubCst>()
                                .map_err(|source| InputError::UnknownLabel {
                                    sample: raw.sample_id.clone(),
                                    source,
                                })?,
                        )
                    }
                },
            };

            if index.contains_key(&raw.sample_id) {
                warn!(
                    sample = %raw.sample_id,
                    "duplicate sampleID in VALENCIA table, keeping the first occurrence"
                );
                continue;
            }
            index.insert(raw.sample_id.clone(), records.len());
            records.push(CstRecord {
                sample_id: raw.sample_id,
                cst,
                sub_cst,
            });
        }

        Ok(Self { records, index })
    }

    /// Looks up a record by sample ID.
    pub fn get(&self, sample_id: &str) -> Option<&CstRecord> {
        self.index.get(sample_id).map(|&i| &self.records[i])
    }

    pub fn records(&self) -> &[CstRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The metadata table, preserving subject first-appearance order.
#[derive(Debug, Clone)]
pub struct MetadataTable {
    records: Vec<MetadataRecord>,
    subject_order: Vec<String>,
}

impl MetadataTable {
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::read(csv::Reader::from_path(path)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::read(csv::Reader::from_reader(reader))
    }

    fn read<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let headers = reader.headers()?.clone();
        require_columns(&headers, METADATA_TABLE, &["sampleID", "subjectID", "menses"])?;

        let mut records: Vec<MetadataRecord> = Vec::new();
        let mut seen_samples: HashSet<String> = HashSet::new();
        let mut subject_order: Vec<String> = Vec::new();
        for row in reader.deserialize() {
            let raw: RawMetadataRow = row?;
            let menses = match raw.menses.trim() {
                "0" => false,
                "1" => true,
                other => {
                    return Err(InputError::InvalidMenses {
                        sample: raw.sample_id,
                        value: other.to_owned(),
                    })
                }
            };

            // One metadata record per sample; repeats would double-count the
            // sample in its subject's composition.
            if !seen_samples.insert(raw.sample_id.clone()) {
                warn!(
                    sample = %raw.sample_id,
                    "duplicate sampleID in metadata table, keeping the first occurrence"
                );
                continue;
            }
            if !subject_order.contains(&raw.subject_id) {
                subject_order.push(raw.subject_id.clone());
            }
            records.push(MetadataRecord {
                sample_id: raw.sample_id,
                subject_id: raw.subject_id,
                menses,
            });
        }

        Ok(Self {
            records,
            subject_order,
        })
    }

    pub fn records(&self) -> &[MetadataRecord] {
        &self.records
    }

    /// Distinct subject IDs in first-appearance order; this is the output
    /// row order.
    pub fn subjects(&self) -> &[String] {
        &self.subject_order
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn require_columns(
    headers: &csv::StringRecord,
    table: &'static str,
    columns: &[&'static str],
) -> Result<()> {
    for column in columns {
        if !headers.iter().any(|h| h.trim() == *column) {
            return Err(InputError::MissingColumn { table, column });
        }
    }
    Ok(())
}
