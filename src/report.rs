use crate::amino::name_amino_acids;
use crate::seq::{Sequence, SequenceType};
use crate::transcribe::transcribe;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Transcription {
    Rna(String),
    Failed(String),
}

#[derive(Serialize, Debug, PartialEq)]
pub struct AminoAcid {
    pub code: char,
    pub name: &'static str,
}

/// The outcome of analysing one sequence.
#[derive(Serialize, Debug)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub sequence: String,
    #[serde(rename = "type")]
    pub sequence_type: SequenceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription: Option<Transcription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amino_acids: Option<Vec<AminoAcid>>,
}

impl Report {
    /// Classifies `raw`, and optionally transcribes it and names its residues.
    ///
    /// Residues are only named for protein sequences.
    pub fn analyse(
        raw: &str,
        file: Option<&Path>,
        with_transcription: bool,
        with_names: bool,
    ) -> Self {
        let sequence = Sequence::new(raw);
        let sequence_type = sequence.kind();
        debug!("Classified {} characters as {sequence_type}", sequence.len());

        let transcription = with_transcription.then(|| match transcribe(raw) {
            Ok(rna) => Transcription::Rna(rna),
            Err(e) => {
                warn!("Transcription skipped: {e}");
                Transcription::Failed(e.to_string())
            }
        });

        let amino_acids = (with_names && sequence_type == SequenceType::Protein).then(|| {
            name_amino_acids(sequence.as_str())
                .into_iter()
                .map(|(code, name)| AminoAcid { code, name })
                .collect()
        });

        Report {
            file: file.map(|p| p.display().to_string()),
            sequence: raw.to_string(),
            sequence_type,
            transcription,
            amino_acids,
        }
    }

    pub fn write_text<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        if let Some(ref file) = self.file {
            writeln!(writer, "Sequence from file: {file}")?;
        }
        writeln!(writer, "Sequence: {}", self.sequence)?;
        writeln!(writer, "Type: {}", self.sequence_type)?;

        match self.transcription {
            Some(Transcription::Rna(ref rna)) => writeln!(writer, "Transcribed RNA: {rna}")?,
            Some(Transcription::Failed(ref reason)) => {
                writeln!(writer, "Transcription failed: {reason}")?
            }
            None => {}
        }

        if let Some(ref residues) = self.amino_acids {
            writeln!(writer, "Amino acids:")?;
            for aa in residues {
                writeln!(writer, "  {}: {}", aa.code, aa.name)?;
            }
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &Report) -> String {
        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn dna_with_transcription() {
        let report = Report::analyse("atgc", None, true, true);
        assert_eq!(report.sequence_type, SequenceType::Dna);
        assert_eq!(report.transcription, Some(Transcription::Rna("AUGC".into())));
        assert!(report.amino_acids.is_none());
        assert_eq!(
            render(&report),
            "Sequence: atgc\nType: DNA\nTranscribed RNA: AUGC\n"
        );
    }

    #[test]
    fn failed_transcription_is_reported() {
        let report = Report::analyse("AUGC", None, true, false);
        assert_eq!(
            render(&report),
            "Sequence: AUGC\nType: RNA\n\
             Transcription failed: input is not a valid DNA sequence (classified as RNA)\n"
        );
    }

    #[test]
    fn protein_names() {
        let report = Report::analyse("MKW", Some(Path::new("p.fa")), false, true);
        assert_eq!(
            render(&report),
            "Sequence from file: p.fa\nSequence: MKW\nType: Protein\nAmino acids:\n  \
             M: Methionine\n  K: Lysine\n  W: Tryptophan\n"
        );
    }

    #[test]
    fn names_only_for_protein() {
        let report = Report::analyse("ACGT", None, false, true);
        assert!(report.amino_acids.is_none());
    }

    #[test]
    fn json_output() {
        let report = Report::analyse("TTTT", None, true, false);
        let mut out = Vec::new();
        report.write_json(&mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["sequence"], "TTTT");
        assert_eq!(value["type"], "DNA");
        assert_eq!(value["transcription"]["rna"], "UUUU");
        assert!(value.get("file").is_none());
        assert!(value.get("amino_acids").is_none());
    }
}
