use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::{ArgGroup, Parser};
use seqsniff::SequenceSource;
use std::path::PathBuf;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 seqsniff version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   identify DNA, RNA and protein sequences";
const EXAMPLES: &str = "Examples:
  seqsniff -s ATGCATGC
  seqsniff -f sequence.fasta
  seqsniff -s ATGCATGC -t
  seqsniff MSKSPPK -a";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    after_help = EXAMPLES,
    arg_required_else_help = true,
    styles = STYLES,
    group(ArgGroup::new("source").required(true).args(["input", "sequence", "file"]))
)]
pub struct Cli {
    /// a sequence, or a path ending in .txt, .fasta or .fa
    pub input: Option<String>,

    /// the biological sequence to analyse
    #[arg(short, long)]
    pub sequence: Option<String>,

    /// a file containing the sequence. files ending in .fasta or .fa have their
    /// first line skipped as a header; otherwise every line starting with `>` is skipped
    #[arg(short, long, verbatim_doc_comment)]
    pub file: Option<PathBuf>,

    /// transcribe DNA to RNA (reports a failure for anything other than DNA)
    #[arg(short, long, action)]
    pub transcribe: bool,

    /// list the full name of each amino acid of a protein sequence
    #[arg(short, long, action)]
    pub amino_acids: bool,

    /// write the report as JSON
    #[arg(long, action)]
    pub json: bool,

    /// the output file, defaulting to standard output
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Cli {
    /// The sequence source chosen on the command line.
    pub fn source(&self) -> Option<SequenceSource> {
        if let Some(ref s) = self.sequence {
            Some(SequenceSource::Literal(s.clone()))
        } else if let Some(ref f) = self.file {
            Some(SequenceSource::File(f.clone()))
        } else {
            self.input.as_deref().map(SequenceSource::detect)
        }
    }
}
