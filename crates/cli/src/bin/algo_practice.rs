//! `algo-practice`: sort, search and traverse JSON input from the command line.
//!
//! Usage:
//!   algo-practice sort [--algorithm merge|quick|quick-iterative] [--config FILE] [--input FILE]
//!   algo-practice sort --low L --high H [--input FILE]
//!   algo-practice search --target N [--input FILE]
//!   algo-practice bfs --nodes N [--input FILE]
//!   algo-practice generate --shape SHAPE --len N [--seed S]
//!
//! Input is read from `--input` or stdin; the result is written to stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use algo_practice_cli::logging::init_tracing;
use algo_practice_cli::{
    bfs_json, generate_json, search_json, sort_json, sort_range_json, CliError, SortConfig,
};
use algo_practice_sort::Algorithm;
use algo_practice_util::fuzzer::Shape;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "algo-practice")]
#[command(about = "Sorting, binary search and BFS over JSON input")]
struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true, env = "ALGO_PRACTICE_LOG_JSON", default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a JSON array of integers.
    Sort {
        /// Sorting algorithm; overrides the config file.
        #[arg(long, value_enum)]
        algorithm: Option<AlgorithmCli>,
        /// JSON file such as `{"algorithm": "quick"}`.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Quick sort only `[low, high]`; requires `--high`.
        #[arg(long, requires = "high", conflicts_with_all = ["algorithm", "config"])]
        low: Option<usize>,
        /// Last index of the range to sort (inclusive).
        #[arg(long, requires = "low")]
        high: Option<usize>,
        /// Read input from this file instead of stdin.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Binary search a sorted JSON array; prints the index or `null`.
    Search {
        /// Value to look for.
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
        /// Read input from this file instead of stdin.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Breadth-first order of a graph given as a JSON array of `[src, dest]` edges.
    Bfs {
        /// Number of vertices, numbered `0..nodes`.
        #[arg(long)]
        nodes: usize,
        /// Read input from this file instead of stdin.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print a generated integer sequence as JSON.
    Generate {
        /// Distribution of the generated values.
        #[arg(long, value_enum, default_value_t = ShapeCli::Random)]
        shape: ShapeCli,
        /// Number of elements.
        #[arg(long)]
        len: usize,
        /// Seed for a repeatable sequence.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmCli {
    Merge,
    Quick,
    QuickIterative,
}

impl From<AlgorithmCli> for Algorithm {
    fn from(value: AlgorithmCli) -> Self {
        match value {
            AlgorithmCli::Merge => Algorithm::Merge,
            AlgorithmCli::Quick => Algorithm::Quick,
            AlgorithmCli::QuickIterative => Algorithm::QuickIterative,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeCli {
    Random,
    DuplicateHeavy,
    Sorted,
    Reversed,
}

impl From<ShapeCli> for Shape {
    fn from(value: ShapeCli) -> Self {
        match value {
            ShapeCli::Random => Shape::Random,
            ShapeCli::DuplicateHeavy => Shape::DuplicateHeavy,
            ShapeCli::Sorted => Shape::Sorted,
            ShapeCli::Reversed => Shape::Reversed,
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(command: Commands) -> Result<String, CliError> {
    match command {
        Commands::Sort {
            algorithm,
            config,
            low,
            high,
            input,
        } => {
            let input = read_input(input.as_deref())?;
            if let (Some(low), Some(high)) = (low, high) {
                return sort_range_json(input.trim(), low, high);
            }
            let config = config.as_deref().map(SortConfig::load).transpose()?;
            let algorithm = SortConfig::resolve(config, algorithm.map(Algorithm::from));
            sort_json(input.trim(), algorithm)
        }
        Commands::Search { target, input } => {
            let input = read_input(input.as_deref())?;
            search_json(input.trim(), target)
        }
        Commands::Bfs { nodes, input } => {
            let input = read_input(input.as_deref())?;
            bfs_json(input.trim(), nodes)
        }
        Commands::Generate { shape, len, seed } => generate_json(shape.into(), len, seed),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match run(cli.command) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
