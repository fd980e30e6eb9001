//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "cadence",
    version,
    about = "Classify vaginal microbiome time series into dynamics categories"
)]
pub struct Cli {
    /// Path to the VALENCIA output CSV.
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// CSV with sampleID,subjectID,menses columns; menses is 1 for a sample
    /// taken during menses, 0 otherwise.
    #[arg(short, long, value_name = "PATH")]
    pub metadata: PathBuf,

    /// Output CSV path.
    #[arg(short, long, value_name = "PATH", default_value = "cadence.out.csv")]
    pub output: PathBuf,

    /// Classify on CST subtypes instead of main types.
    #[arg(short, long)]
    pub subtypes: bool,

    /// Comma-separated list of labels considered eubiotic.
    #[arg(short, long, value_name = "LIST")]
    pub eubiotic: Option<String>,

    /// Comma-separated list of labels considered dysbiotic.
    #[arg(short, long, value_name = "LIST")]
    pub dysbiotic: Option<String>,

    /// Log warnings and errors only.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log per-subject detail.
    #[arg(short, long)]
    pub verbose: bool,
}
