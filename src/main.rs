use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use resistor_pair::*;

/// Finds, for each target resistance, the closest two-resistor combination at or above it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File of available resistor values, one per line
    #[arg(short, long, value_name = "FILE", default_value = "resistors.txt")]
    resistors: PathBuf,

    /// File of target values, one per line
    #[arg(short, long, value_name = "FILE", default_value = "targets.txt")]
    targets: PathBuf,

    /// Use a standard series instead of the resistors file
    #[arg(short, long, value_enum, ignore_case = true, conflicts_with = "resistors")]
    series: Option<Standard>,

    /// Never pair a resistor with itself
    #[arg(long)]
    distinct: bool,

    /// How R1 and R2 are printed
    #[arg(long, value_enum, default_value_t = Notation::Fixed)]
    notation: Notation,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let inventory = match args.series {
        Some(standard) => standard.series().values().to_vec(),
        None => load_values(&args.resistors)?,
    };
    let targets = load_values(&args.targets)?;

    let finder = PairFinder::new(inventory).distinct(args.distinct);
    info!(
        resistors = finder.inventory().len(),
        targets = targets.len(),
        pairs = finder.pair_count(),
        "searching"
    );

    let results = finder.best_for_all(&targets);
    let stdout = io::stdout();
    Report::new(stdout.lock(), args.notation).table(&results)
}

fn main() -> ExitCode {
    init_logging();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
