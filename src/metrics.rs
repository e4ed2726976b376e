/// Codons counted as translation starts
pub(crate) const START_CODONS: [&[u8; 3]; 1] = [b"ATG"];

/// Codons counted as translation stops
pub(crate) const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Returns the percentage of `G` and `C` bases, rounded to two decimals.
///
/// Rounding is half-up on the exact ratio, so a GC fraction of 1/32 (3.125 %) yields 3.13.
/// An empty sequence yields 0.0.
pub(crate) fn gc_percent(sequence: &[u8]) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence
        .iter()
        .filter(|base| matches!(base, b'G' | b'C'))
        .count() as u64;
    let len = sequence.len() as u64;
    // hundredths of a percent: gc / len * 10_000, half-up
    let hundredths = (gc * 20_000 + len) / (2 * len);
    hundredths as f64 / 100.0
}

/// Counts the in-frame codons of `sequence` that belong to `codons`.
///
/// The sequence is split into non-overlapping triplets from the first base; trailing bases that
/// do not fill a triplet are ignored.
pub(crate) fn codon_count(sequence: &[u8], codons: &[&[u8; 3]]) -> usize {
    sequence
        .chunks_exact(3)
        .filter(|triplet| codons.iter().any(|codon| codon.as_slice() == *triplet))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gc_percent_of_mixed_sequence() {
        assert_eq!(gc_percent(b"ATGC"), 50.0);
        assert_eq!(gc_percent(b"ATGGCTAA"), 37.5);
    }

    #[test]
    fn gc_percent_bounds() {
        assert_eq!(gc_percent(b"ATTA"), 0.0);
        assert_eq!(gc_percent(b"AAAAAAAAAAAT"), 0.0);
        assert_eq!(gc_percent(b"GGCC"), 100.0);
        assert_eq!(gc_percent(b"G"), 100.0);
    }

    #[test]
    fn gc_percent_of_empty_sequence() {
        assert_eq!(gc_percent(b""), 0.0);
    }

    #[test]
    fn gc_percent_rounds_to_two_decimals() {
        assert_eq!(gc_percent(b"GCA"), 66.67);
        assert_eq!(gc_percent(b"GCGAAAA"), 42.86);
    }

    #[test]
    fn gc_percent_rounds_ties_up() {
        let mut sequence = vec![b'A'; 31];
        sequence.push(b'G');
        assert_eq!(gc_percent(&sequence), 3.13);
        sequence[0] = b'C';
        sequence[1] = b'C';
        // 3/32 = 9.375 %
        assert_eq!(gc_percent(&sequence), 9.38);
    }

    #[test]
    fn counts_start_and_stop_codons() {
        let sequence = b"ATGTAGATGTGAATG";
        // in-frame triplets: ATG|TAG|ATG|TGA|ATG
        assert_eq!(codon_count(sequence, &START_CODONS), 3);
        assert_eq!(codon_count(sequence, &STOP_CODONS), 2);
    }

    #[test]
    fn ignores_out_of_frame_codons() {
        assert_eq!(codon_count(b"AATGA", &START_CODONS), 0);
        assert_eq!(codon_count(b"CTAAC", &STOP_CODONS), 0);
    }

    #[test]
    fn short_sequences_have_no_codons() {
        assert_eq!(codon_count(b"AT", &START_CODONS), 0);
        assert_eq!(codon_count(b"", &STOP_CODONS), 0);
    }

    #[test]
    fn ignores_trailing_partial_codon() {
        assert_eq!(codon_count(b"ATGAT", &START_CODONS), 1);
        assert_eq!(codon_count(b"TAATA", &STOP_CODONS), 1);
    }
}
