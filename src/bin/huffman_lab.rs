//! Huffman lab runner: reads a sectioned input file and writes the tree,
//! encode and decode reports.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use huffcode::standard::standard_table;
use huffcode::{input, report, CodecDriver, LabConfig};
use tracing::{info, warn};

/// Build Huffman trees from an input file and write the three reports.
#[derive(Parser)]
#[command(name = "huffman-lab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file with FREQUENCY TABLE, ENCODE and DECODE sections.
    input: PathBuf,

    /// Tree report path.
    tree_file: Option<PathBuf>,

    /// Encode report path.
    encode_file: Option<PathBuf>,

    /// Decode report path.
    decode_file: Option<PathBuf>,

    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail instead of decoding with the standard table.
    #[arg(long)]
    no_standard_table: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; reports go to files.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => LabConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LabConfig::default(),
    };
    if let Some(path) = cli.tree_file {
        config.tree_file = path;
    }
    if let Some(path) = cli.encode_file {
        config.encode_file = path;
    }
    if let Some(path) = cli.decode_file {
        config.decode_file = path;
    }
    if cli.no_standard_table {
        config.use_standard_table = false;
    }

    let normalization = config.normalization();
    let lab = input::read_input(&cli.input, normalization)
        .with_context(|| format!("reading input {}", cli.input.display()))?;
    info!(path = %cli.input.display(), "parsed input file");

    let standard = config.use_standard_table.then(standard_table);
    let driver = CodecDriver::new(lab.table, standard, normalization)
        .context("building the decoding tree")?;

    match driver.decoding_tree() {
        Ok(tree) => report::write_report(&config.tree_file, &report::tree_report(tree))?,
        Err(e) => warn!(error = %e, "skipping tree report"),
    }

    let encoded = driver.encode_batch(&lab.phrases);
    report::write_report(&config.encode_file, &report::encode_report(&encoded))?;

    let decoded = driver
        .decode_batch(&lab.codes)
        .context("decoding bit strings")?;
    report::write_report(&config.decode_file, &report::decode_report(&decoded))?;

    let failures = encoded.iter().filter(|o| o.result.is_err()).count()
        + decoded.iter().filter(|o| o.result.is_err()).count();
    info!(failures, "all tasks complete");
    Ok(())
}
