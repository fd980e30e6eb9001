//! cadence: classify vaginal microbiome time series into dynamics categories.

mod cli;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cadence_classify::{classify_cohort, Cohort, DynamicsClassifier, SeriesLabel, SubjectDynamics};
use cadence_core::{parse_label_list, Cst, CstLabel, CstMode, CstPartition, SubCst};
use cadence_io::{write_dynamics, MetadataTable, ValenciaTable};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    run(cli)
}

fn init_tracing(cli: &Cli) {
    let default_filter = if cli.quiet {
        "warn"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mode = if cli.subtypes {
        CstMode::Subtypes
    } else {
        CstMode::MainTypes
    };

    let valencia = ValenciaTable::from_path(&cli.input, mode)
        .with_context(|| format!("reading VALENCIA output from {}", cli.input.display()))?;
    let metadata = MetadataTable::from_path(&cli.metadata)
        .with_context(|| format!("reading metadata from {}", cli.metadata.display()))?;
    info!(
        samples = valencia.len(),
        subjects = metadata.subjects().len(),
        "tables loaded"
    );

    let rows = match mode {
        CstMode::MainTypes => {
            let partition = partition_from_args(
                cli.eubiotic.as_deref(),
                cli.dysbiotic.as_deref(),
                CstPartition::default_main(),
            )?;
            classify(&valencia, &metadata, partition)?
        }
        CstMode::Subtypes => {
            let partition = partition_from_args(
                cli.eubiotic.as_deref(),
                cli.dysbiotic.as_deref(),
                CstPartition::default_subtypes(),
            )?;
            classify(&valencia, &metadata, partition)?
        }
    };

    write_dynamics(
        &cli.output,
        rows.iter()
            .map(|row| (row.subject_id.as_str(), row.assignment.as_str())),
    )
    .with_context(|| format!("writing dynamics to {}", cli.output.display()))?;
    info!(subjects = rows.len(), output = %cli.output.display(), "dynamics written");
    Ok(())
}

/// Builds the partition from the CLI lists, falling back to the mode's
/// default set for whichever side was not given.
fn partition_from_args<L: CstLabel>(
    eubiotic: Option<&str>,
    dysbiotic: Option<&str>,
    defaults: CstPartition<L>,
) -> anyhow::Result<CstPartition<L>> {
    let eubiotic = match eubiotic {
        Some(list) => parse_label_list(list).context("parsing --eubiotic")?,
        None => defaults.eubiotic().clone(),
    };
    let dysbiotic = match dysbiotic {
        Some(list) => parse_label_list(list).context("parsing --dysbiotic")?,
        None => defaults.dysbiotic().clone(),
    };
    CstPartition::new(eubiotic, dysbiotic).context("invalid eubiotic/dysbiotic configuration")
}

fn classify<L: SeriesLabel>(
    valencia: &ValenciaTable,
    metadata: &MetadataTable,
    partition: CstPartition<L>,
) -> anyhow::Result<Vec<SubjectDynamics>> {
    let cohort: Cohort<L> = Cohort::assemble(valencia, metadata).context("joining tables")?;
    let classifier = DynamicsClassifier::new(partition);
    Ok(classify_cohort(&classifier, &cohort))
}
