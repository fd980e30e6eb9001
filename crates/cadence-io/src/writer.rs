//! Output table writing.

use std::path::Path;

use tracing::warn;

use crate::error::Result;

/// Writes the per-subject dynamics table.
///
/// One row per subject, in the iteration order of `rows` (callers pass
/// subjects in metadata first-appearance order). The identifier column header
/// is `SampleID` even though it carries subject IDs; downstream consumers of
/// the historical tool key on that header, so it is kept as-is.
///
/// An existing file at `path` is overwritten after a warning.
pub fn write_dynamics<'a, I>(path: &Path, rows: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    if path.exists() {
        warn!(path = %path.display(), "output file already exists and will be overwritten");
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["SampleID", "Dynamics"])?;
    for (subject_id, dynamics) in rows {
        writer.write_record([subject_id, dynamics])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_header_and_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dynamics.csv");

        write_dynamics(
            &path,
            [
                ("S2", "Constant eubiotic"),
                ("S1", "Unstable"),
                ("S3", "Undetermined"),
            ],
        )
        .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "SampleID,Dynamics\nS2,Constant eubiotic\nS1,Unstable\nS3,Undetermined\n"
        );
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dynamics.csv");
        fs::write(&path, "stale").unwrap();

        write_dynamics(&path, [("S1", "Unstable")]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "SampleID,Dynamics\nS1,Unstable\n");
    }
}
