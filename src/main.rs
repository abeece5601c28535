extern crate env_logger;
#[macro_use]
extern crate log;
use std::{
    fs::File,
    io::{prelude::*, stdout, BufWriter},
    path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;

use seqsniff::loader::{load_sequence, SequenceSource};
use seqsniff::report::Report;

mod cli;

use cli::Cli;

/// Creates a `BufWriter` for the given output option. This allows for an output file to be passed
/// or otherwise will default to using standard output.
fn get_writer(output: &Option<String>) -> Result<impl Write> {
    // get output as a BufWriter - equal to stdout if None
    let writer = BufWriter::new(match output {
        Some(ref x) => {
            let file = File::create(Path::new(x))
                .with_context(|| format!("Could not create output file {x}"))?;
            Box::new(file) as Box<dyn Write + Send>
        }
        None => Box::new(stdout()) as Box<dyn Write + Send>,
    });
    Ok(writer)
}

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();
    debug!("seqsniff v{}", cli::VERSION);

    let source = cli
        .source()
        .context("No sequence or file given. Run with --help for usage.")?;

    let raw = load_sequence(&source)?;
    let file = match source {
        SequenceSource::File(ref path) => Some(path.as_path()),
        SequenceSource::Literal(_) => None,
    };

    let report = Report::analyse(&raw, file, cli.transcribe, cli.amino_acids);

    let mut writer = get_writer(&cli.output)?;
    if cli.json {
        report.write_json(&mut writer)?;
    } else {
        report.write_text(&mut writer)?;
    }
    writer.flush()?;

    if let Some(ref output) = cli.output {
        info!("Wrote report to {output}");
    }
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));
    }
}
