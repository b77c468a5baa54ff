use anyhow::{Context, bail};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod diagnostics;
mod emit;
mod error;
mod hierarchy;
mod id;
mod path;
mod slug;
mod source;
mod types;

use hierarchy::Hierarchy;
use types::TypeTable;

pub type Result<T> = anyhow::Result<T>;

const DEFAULT_INPUT: &str = "data.csv";
const DEFAULT_TABLE_OUTPUT: &str = "output.csv";
const DEFAULT_SQL_OUTPUT: &str = "inserts.sql";

#[derive(Parser)]
#[command(name = "division-id")]
#[command(
    about = "Derive stable ids for an administrative division hierarchy",
    long_about = None
)]
struct Cli {
    /// Write SQL insert statements instead of an enriched CSV.
    #[arg(long)]
    sql: bool,

    /// JSON object of type label -> two-letter code, replacing the built-in table.
    #[arg(long, value_name = "FILE")]
    types: Option<PathBuf>,

    /// Field delimiter for the input and the CSV output.
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Log every skipped row.
    #[arg(short, long)]
    verbose: bool,

    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Defaults to output.csv, or inserts.sql with --sql.
    output: Option<PathBuf>,
}

impl Cli {
    fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None if self.sql => PathBuf::from(DEFAULT_SQL_OUTPUT),
            None => PathBuf::from(DEFAULT_TABLE_OUTPUT),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let delimiter = delimiter_byte(cli.delimiter)?;

    // 1) Type table.
    let table = match &cli.types {
        Some(path) => TypeTable::load(path)?,
        None => TypeTable::builtin(),
    };
    info!("type table has {} entries", table.len());

    // 2) Read source.
    let source = source::read_source_file(&cli.input, delimiter)?;
    info!(
        "read {} levels and {} rows from {}",
        source.headers.len(),
        source.rows.len(),
        cli.input.display()
    );

    // 3) Build (unknown header types abort here, before anything is written).
    let hierarchy = hierarchy::build_hierarchy(&source, &table)?;
    log_summary(&hierarchy);

    // 4) Render + write.
    let out = cli.output_path();
    if cli.sql {
        write_output(&out, emit::render_statements(&hierarchy).as_bytes())?;
    } else {
        if hierarchy.divisions.is_empty() {
            warn!("no valid rows found; {} not written", out.display());
            return Ok(());
        }
        write_output(&out, &emit::render_table(&hierarchy, delimiter)?)?;
    }

    Ok(())
}

fn log_summary(hierarchy: &Hierarchy) {
    info!(
        "built {} divisions over {} levels",
        hierarchy.divisions.len(),
        hierarchy.max_depth()
    );
    for row in &hierarchy.skipped.rows {
        debug!("skipped line {}: {}", row.line, row.reason);
    }
    if !hierarchy.skipped.is_empty() {
        info!(
            "skipped {} rows ({} empty, {} with gaps)",
            hierarchy.skipped.rows.len(),
            hierarchy.skipped.empty_rows(),
            hierarchy.skipped.gap_rows()
        );
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("write output file {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", delimiter);
    }
    Ok(delimiter as u8)
}
