use crate::seq::{Sequence, SequenceType};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionError {
    #[error("input is not a valid DNA sequence (classified as {0})")]
    NotDna(SequenceType),
}

/// Transcribes DNA to RNA by replacing every `T` with `U`.
///
/// The input is normalized the same way as [`crate::classify`]. Anything that
/// does not classify as DNA, the empty string included, is rejected with the
/// classification it did receive.
pub fn transcribe(raw: &str) -> Result<String, TranscriptionError> {
    let seq = Sequence::new(raw);

    match seq.kind() {
        SequenceType::Dna => Ok(seq.as_str().replace('T', "U")),
        other => Err(TranscriptionError::NotDna(other)),
    }
}
