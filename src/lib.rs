//! Classification of short biological sequences as DNA, RNA or protein, with
//! DNA to RNA transcription and amino acid naming.

#[macro_use]
extern crate log;

pub mod amino;
pub mod classify;
pub mod loader;
pub mod report;
pub mod seq;
pub mod transcribe;

pub use amino::name_amino_acids;
pub use classify::classify;
pub use loader::{load_sequence, LoadError, SequenceSource};
pub use seq::{Sequence, SequenceType};
pub use transcribe::{transcribe, TranscriptionError};
