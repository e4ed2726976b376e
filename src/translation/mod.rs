use amino_acids::{AminoAcid, Protein};
use anyhow::Result;
use itertools::Itertools;

pub(crate) mod amino_acids;

/// Translates a DNA sequence to a protein sequence using the standard genetic code.
///
/// Translation runs in frame from the first base and ends at the first stop codon, which is not
/// part of the protein. A trailing partial codon is dropped.
pub(crate) fn dna_to_protein(dna: &[u8]) -> Result<Protein> {
    let mut protein = Vec::with_capacity(dna.len() / 3);
    for (a, b, c) in dna.iter().tuples() {
        let amino_acid = AminoAcid::from_codon(&[*a, *b, *c])?;
        if amino_acid.is_stop() {
            break;
        }
        protein.push(amino_acid);
    }
    Ok(Protein::new(protein))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dna_to_protein() -> Result<()> {
        assert_eq!(dna_to_protein(b"ATGGCTACT")?.to_string(), "MAT");
        assert_eq!(dna_to_protein(b"ATGCGCGTAAATGCGCGT")?.to_string(), "MRVNAR");
        Ok(())
    }

    #[test]
    fn test_dna_to_protein_with_incomplete_codon() -> Result<()> {
        assert_eq!(dna_to_protein(b"ATGCGCGT")?.to_string(), "MR");
        assert_eq!(dna_to_protein(b"AT")?.to_string(), "");
        Ok(())
    }

    #[test]
    fn test_dna_to_protein_with_stop_codon() -> Result<()> {
        assert_eq!(dna_to_protein(b"ATGTAA")?.to_string(), "M");
        assert_eq!(dna_to_protein(b"GCATAATATATG")?.to_string(), "A");
        assert_eq!(dna_to_protein(b"TGAATGATG")?.to_string(), "");
        Ok(())
    }

    #[test]
    fn test_dna_to_protein_empty() -> Result<()> {
        assert_eq!(dna_to_protein(b"")?.to_string(), "");
        Ok(())
    }

    #[test]
    fn synonymous_codons_translate_alike() -> Result<()> {
        assert_eq!(dna_to_protein(b"CTTCTCCTACTGTTATTG")?.to_string(), "LLLLLL");
        Ok(())
    }

    #[test]
    fn out_of_frame_stop_does_not_terminate() -> Result<()> {
        // TAA spans the first and second codon
        assert_eq!(dna_to_protein(b"GTAATG")?.to_string(), "VM");
        Ok(())
    }

    #[test]
    fn test_dna_to_protein_with_invalid_codon() {
        match dna_to_protein(b"ATGNNN") {
            Err(e) => assert_eq!(e.to_string(), "Invalid codon: NNN"),
            _ => panic!("Expected an error"),
        }
    }
}
