use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use web_time::Instant;

use reversi_transcript::config::{ConverterConfig, SnapshotTiming};
use reversi_transcript::dataset;
use reversi_transcript::replay::convert_transcript;

/// Convert a recorded Othello game into per-move board snapshots.
#[derive(Debug, Parser)]
#[command(name = "transcript_conv", version, about = "Replay a game transcript into board records")]
struct Cli {
    /// Game transcript file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file for the records
    #[arg(value_name = "OUT_FILE")]
    out_file: PathBuf,

    /// Path to TOML configuration file
    #[arg(long, default_value = "transcript.toml")]
    config: PathBuf,

    /// Record the board each player faced instead of the board after the move
    #[arg(long)]
    before_move: bool,

    /// Reject moves that capture nothing
    #[arg(long)]
    strict: bool,

    /// Omit the header row
    #[arg(long)]
    no_header: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = ConverterConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if cli.before_move {
        config.replay.snapshot = SnapshotTiming::BeforeMove;
    }
    if cli.strict {
        config.replay.require_captures = true;
    }
    if cli.no_header {
        config.output.header = false;
    }

    let started = Instant::now();
    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let records = convert_transcript(&text, &config.replay)
        .with_context(|| format!("converting {}", cli.input.display()))?;

    dataset::write_records_to_path(
        &cli.out_file,
        &records,
        config.output.header,
        config.output.delimiter,
    )
    .with_context(|| format!("writing {}", cli.out_file.display()))?;

    log::info!(
        "{}: {} records written to {} in {:?}",
        cli.input.display(),
        records.len(),
        cli.out_file.display(),
        started.elapsed()
    );
    Ok(())
}
