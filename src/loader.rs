use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions which mark a positional argument as a file rather than a sequence.
const FILE_EXTENSIONS: [&str; 3] = ["txt", "fasta", "fa"];
const FASTA_EXTENSIONS: [&str; 2] = ["fasta", "fa"];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read sequence file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No sequence data found in {}", path.display())]
    Empty { path: PathBuf },
}

/// Where a sequence comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceSource {
    Literal(String),
    File(PathBuf),
}

impl SequenceSource {
    /// Treats `arg` as a file path if it ends in `.txt`, `.fasta` or `.fa`,
    /// and as a literal sequence otherwise.
    pub fn detect(arg: &str) -> Self {
        if has_extension(Path::new(arg), &FILE_EXTENSIONS) {
            SequenceSource::File(PathBuf::from(arg))
        } else {
            SequenceSource::Literal(arg.to_string())
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SourceFormat {
    /// First line is a header, everything after it is sequence
    Fasta,
    /// Any line starting with `>` is a header or comment
    Plain,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Self {
        if has_extension(path, &FASTA_EXTENSIONS) {
            SourceFormat::Fasta
        } else {
            SourceFormat::Plain
        }
    }

    pub fn parse(&self, contents: &str) -> String {
        match self {
            SourceFormat::Fasta => parse_fasta(contents),
            SourceFormat::Plain => parse_plain(contents),
        }
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

fn strip_blanks(s: String) -> String {
    s.chars().filter(|&c| c != ' ' && c != '\t').collect()
}

/// Drops the header line and joins every remaining line.
pub fn parse_fasta(contents: &str) -> String {
    let joined: String = contents.lines().skip(1).map(str::trim).collect();
    strip_blanks(joined)
}

/// Drops all lines beginning with `>` and joins the rest.
pub fn parse_plain(contents: &str) -> String {
    let joined: String = contents
        .lines()
        .filter(|line| !line.starts_with('>'))
        .map(str::trim)
        .collect();
    strip_blanks(joined)
}

/// Produces the raw sequence text for `source`.
///
/// Literal sequences are only trimmed. Files are read in full and parsed
/// according to their [`SourceFormat`], with all spaces and tabs removed.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read (missing, unreadable or
/// not UTF-8), or if it holds no sequence characters.
pub fn load_sequence(source: &SequenceSource) -> Result<String, LoadError> {
    match source {
        SequenceSource::Literal(s) => Ok(s.trim().to_string()),
        SequenceSource::File(path) => {
            let format = SourceFormat::from_path(path);
            debug!("Reading {} as {:?}", path.display(), format);

            let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;

            let sequence = format.parse(&contents);
            if sequence.is_empty() {
                return Err(LoadError::Empty { path: path.clone() });
            }

            info!("Loaded {} characters from {}", sequence.len(), path.display());
            Ok(sequence)
        }
    }
}
