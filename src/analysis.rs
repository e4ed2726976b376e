use crate::metrics::{codon_count, gc_percent, START_CODONS, STOP_CODONS};
use crate::translation::dna_to_protein;
use crate::validation::DnaSequence;
use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashSet;

/// Column names of the tabular report, in field order of [`AnalysisRecord`]
pub(crate) const REPORT_HEADER: [&str; 6] = [
    "ID",
    "Longitud",
    "%GC",
    "Codones_inicio_ATG",
    "Codones_paro",
    "Proteina_traducida",
];

/// Composition, codon and translation results for one sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct AnalysisRecord {
    pub(crate) id: String,
    pub(crate) length: usize,
    pub(crate) gc_percent: f64,
    pub(crate) start_codon_count: usize,
    pub(crate) stop_codon_count: usize,
    pub(crate) protein: String,
}

impl AnalysisRecord {
    pub(crate) fn from_sequence(sequence: &DnaSequence) -> Result<AnalysisRecord> {
        let bases = sequence.bases();
        let protein = dna_to_protein(bases)
            .with_context(|| format!("Failed to translate sequence {}", sequence.id()))?;
        debug!(
            "Translated {} bases of {} into {} amino acids",
            sequence.len(),
            sequence.id(),
            protein.len()
        );
        Ok(AnalysisRecord {
            id: sequence.id().to_string(),
            length: sequence.len(),
            gc_percent: gc_percent(bases),
            start_codon_count: codon_count(bases, &START_CODONS),
            stop_codon_count: codon_count(bases, &STOP_CODONS),
            protein: protein.to_string(),
        })
    }
}

/// Records of one pipeline run in input order
#[derive(Debug, Default)]
pub(crate) struct AnalysisRun {
    records: Vec<AnalysisRecord>,
    ids: HashSet<String>,
    skipped: usize,
}

impl AnalysisRun {
    pub(crate) fn new() -> AnalysisRun {
        AnalysisRun::default()
    }

    /// Appends a record. Repeated identifiers are kept and reported.
    pub(crate) fn push(&mut self, record: AnalysisRecord) {
        if !self.ids.insert(record.id.clone()) {
            warn!(
                "Sequence identifier {} occurs more than once, keeping every occurrence",
                record.id
            );
        }
        self.records.push(record);
    }

    pub(crate) fn skip(&mut self) {
        self.skipped += 1;
    }

    pub(crate) fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    pub(crate) fn skipped(&self) -> usize {
        self.skipped
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, raw: &[u8]) -> AnalysisRecord {
        AnalysisRecord::from_sequence(&DnaSequence::new(id, raw).unwrap()).unwrap()
    }

    #[test]
    fn builds_record_from_sequence() {
        assert_eq!(
            record("gen_test", b"ATGGCTAA"),
            AnalysisRecord {
                id: "gen_test".to_string(),
                length: 8,
                gc_percent: 37.5,
                start_codon_count: 1,
                stop_codon_count: 0,
                protein: "MA".to_string(),
            }
        );
    }

    #[test]
    fn record_counts_codons_after_stop() {
        let record = record("seq", b"ATGTAAATGTGA");
        assert_eq!(record.start_codon_count, 2);
        assert_eq!(record.stop_codon_count, 2);
        assert_eq!(record.protein, "M");
    }

    #[test]
    fn run_preserves_insertion_order() {
        let mut run = AnalysisRun::new();
        run.push(record("b", b"GGG"));
        run.skip();
        run.push(record("a", b"AAA"));
        let ids: Vec<&str> = run.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(run.len(), 2);
        assert_eq!(run.skipped(), 1);
    }

    #[test]
    fn run_keeps_duplicate_ids() {
        let mut run = AnalysisRun::new();
        run.push(record("dup", b"GGG"));
        run.push(record("dup", b"AAA"));
        assert_eq!(run.len(), 2);
    }

    #[test]
    fn new_run_is_empty() {
        assert!(AnalysisRun::new().is_empty());
    }
}
