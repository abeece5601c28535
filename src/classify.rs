use crate::seq::{Sequence, SequenceType};

/// Classifies a raw string as DNA, RNA, protein, or unknown.
///
/// The input is trimmed and uppercased first. Alphabets are tested in a fixed
/// order (DNA, then RNA, then protein) and the first full match wins, so a
/// string such as `"ACGT"` is always DNA even though it is also a valid
/// peptide. An empty string, or one with any character outside all three
/// alphabets (including embedded spaces), is `Unknown`.
///
/// # Example
///
/// ```
/// use seqsniff::{classify, SequenceType};
///
/// assert_eq!(classify("atgc"), SequenceType::Dna);
/// assert_eq!(classify("MSKSPPK"), SequenceType::Protein);
/// ```
pub fn classify(raw: &str) -> SequenceType {
    Sequence::new(raw).kind()
}
