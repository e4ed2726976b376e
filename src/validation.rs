use thiserror::Error;

/// Reasons a raw FASTA sequence is rejected before analysis
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum InvalidSequence {
    #[error("sequence is empty")]
    Empty,
    #[error("invalid nucleotide '{symbol}' at position {position}")]
    InvalidNucleotide { symbol: char, position: usize },
}

/// A non-empty, upper-cased DNA sequence containing only `A`, `C`, `G` and `T`
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DnaSequence {
    id: String,
    bases: Vec<u8>,
}

impl DnaSequence {
    /// Upper-cases `raw` and checks it against the DNA alphabet.
    pub(crate) fn new(id: &str, raw: &[u8]) -> Result<DnaSequence, InvalidSequence> {
        if raw.is_empty() {
            return Err(InvalidSequence::Empty);
        }
        let bases = raw.to_ascii_uppercase();
        if let Some(position) = bases
            .iter()
            .position(|base| !matches!(base, b'A' | b'C' | b'G' | b'T'))
        {
            return Err(InvalidSequence::InvalidNucleotide {
                symbol: String::from_utf8_lossy(&raw[position..])
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
                position: position + 1,
            });
        }
        Ok(DnaSequence {
            id: id.to_string(),
            bases,
        })
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn bases(&self) -> &[u8] {
        &self.bases
    }

    pub(crate) fn len(&self) -> usize {
        self.bases.len()
    }
}
