pub mod alphabet;

use serde::Serialize;
use std::fmt;

/// The kind of biological sequence a string represents.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize)]
pub enum SequenceType {
    #[serde(rename = "DNA")]
    Dna,
    #[serde(rename = "RNA")]
    Rna,
    Protein,
    Unknown,
}

impl SequenceType {
    pub fn label(&self) -> &'static str {
        match self {
            SequenceType::Dna => "DNA",
            SequenceType::Rna => "RNA",
            SequenceType::Protein => "Protein",
            SequenceType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A normalized sequence: surrounding whitespace trimmed and every character
/// uppercased. Internal whitespace is kept.
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct Sequence(String);

impl Sequence {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Classifies the sequence. Computed fresh on every call.
    pub fn kind(&self) -> SequenceType {
        let bytes = self.0.as_bytes();

        // order matters: ACGT-only input is also a valid protein
        if self.is_empty() {
            SequenceType::Unknown
        } else if alphabet::DNA.is_word(bytes) {
            SequenceType::Dna
        } else if alphabet::RNA.is_word(bytes) {
            SequenceType::Rna
        } else if alphabet::PROTEIN.is_word(bytes) {
            SequenceType::Protein
        } else {
            SequenceType::Unknown
        }
    }
}
