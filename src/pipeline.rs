use crate::analysis::{AnalysisRecord, AnalysisRun};
use crate::config::Config;
use crate::report::{render_png_chart, render_table};
use crate::utils::fasta;
use crate::validation::DnaSequence;
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

/// Outcome of a completed run
#[derive(Debug)]
pub(crate) struct Summary {
    pub(crate) analyzed: usize,
    pub(crate) skipped: usize,
    pub(crate) table: PathBuf,
    pub(crate) chart: Option<PathBuf>,
}

/// Analyzes every record of the input FASTA file and writes the table and chart.
///
/// Invalid records are skipped with a warning. An input that cannot be opened as a file is reported as
/// [`fasta::InputUnavailable`] before any output is written; every other I/O failure aborts the
/// run.
pub(crate) fn run(config: &Config) -> Result<Summary> {
    info!("Reading sequences from {}", config.input.display());
    let records = fasta::open_reader(&config.input)?;

    let mut run = AnalysisRun::new();
    for result in records {
        let record = result
            .with_context(|| format!("Failed to read FASTA file {}", config.input.display()))?;
        let sequence = match DnaSequence::new(record.id(), record.seq()) {
            Ok(sequence) => sequence,
            Err(reason) => {
                warn!("Skipping invalid sequence {}: {reason}", record.id());
                run.skip();
                continue;
            }
        };
        match AnalysisRecord::from_sequence(&sequence) {
            Ok(analysis) => run.push(analysis),
            Err(err) => {
                warn!("Skipping sequence {}: {err:#}", record.id());
                run.skip();
            }
        }
    }
    info!("Analyzed {} sequences, skipped {}", run.len(), run.skipped());

    let table = render_table(&config.table, &run)?;
    let chart = render_png_chart(&config.chart, &run)?;
    if chart.is_none() {
        warn!("No valid sequences found, skipping the GC content chart");
    }

    Ok(Summary {
        analyzed: run.len(),
        skipped: run.skipped(),
        table,
        chart,
    })
}
