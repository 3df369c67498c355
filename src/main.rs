//! Word Ladder - CLI
//!
//! Solves word ladder puzzles, reports the shortest possible ladder between two
//! words, and generates new puzzles.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_ladder::{
    commands::{
        BenchmarkConfig, GenerateConfig, SolveConfig, generate_puzzle, minimum_length,
        run_benchmark, solve_puzzle,
    },
    graph::GraphRegistry,
    log::init_logger,
    output::{
        print_benchmark_result, print_generate_result, print_minimum_length, print_solve_result,
    },
    wordlists::WordListSource,
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder solver and generator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory of <N>-letter-words.txt lists (default: built-in lists)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every ladder between two words
    Solve {
        start: String,
        end: String,

        /// Longest ladder to list, in words (0 = shortest possible)
        #[arg(short, long, default_value = "0")]
        max: usize,

        /// Show explored branch count and timing
        #[arg(short, long)]
        verbose: bool,
    },

    /// Length of the shortest ladder between two words
    Min { start: String, end: String },

    /// Generate a random puzzle
    Generate {
        /// Letters per word
        #[arg(short = 'w', long, default_value = "4")]
        word_length: usize,

        /// Words in the ladder, both ends included
        #[arg(short = 'l', long, default_value = "5")]
        ladder_length: usize,

        /// Give up after this many dead ends
        #[arg(long, default_value = "10")]
        attempts: usize,

        /// Also list every ladder for the generated puzzle
        #[arg(long)]
        solve: bool,
    },

    /// Generate and solve many puzzles
    Benchmark {
        #[arg(short = 'w', long, default_value = "4")]
        word_length: usize,

        #[arg(short = 'l', long, default_value = "5")]
        ladder_length: usize,

        /// Number of puzzles
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let source = cli
        .data_dir
        .map_or(WordListSource::Embedded, WordListSource::Directory);
    let registry = GraphRegistry::new(source);
    log::debug!("Reading word lists from {:?}", registry.source());

    match cli.command {
        Commands::Solve {
            start,
            end,
            max,
            verbose,
        } => run_solve_command(&registry, start, end, max, verbose),
        Commands::Min { start, end } => {
            let minimum = minimum_length(&registry, &start, &end)?;
            print_minimum_length(&start, &end, minimum);
            Ok(())
        }
        Commands::Generate {
            word_length,
            ladder_length,
            attempts,
            solve,
        } => run_generate_command(&registry, word_length, ladder_length, attempts, solve),
        Commands::Benchmark {
            word_length,
            ladder_length,
            count,
        } => {
            println!(
                "Running benchmark on {count} puzzles of {ladder_length} {word_length}-letter words..."
            );
            let config = BenchmarkConfig::new(word_length, ladder_length, count);
            let result = run_benchmark(&registry, &config, &mut rand::rng())?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_solve_command(
    registry: &GraphRegistry,
    start: String,
    end: String,
    max: usize,
    verbose: bool,
) -> Result<()> {
    let config = SolveConfig::new(start, end).with_max_ladder_length(max);
    let result = solve_puzzle(registry, &config).map_err(|e| {
        let context = if e.is_rejected_input() {
            format!("Invalid puzzle {} -> {}", config.start, config.end)
        } else {
            format!("Cannot load word list for {}", config.start)
        };
        anyhow::Error::new(e).context(context)
    })?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_generate_command(
    registry: &GraphRegistry,
    word_length: usize,
    ladder_length: usize,
    attempts: usize,
    solve: bool,
) -> Result<()> {
    let config = GenerateConfig {
        word_length,
        ladder_length,
        max_attempts: attempts,
    };
    let generated = generate_puzzle(registry, &config, &mut rand::rng())?;
    print_generate_result(&generated, !solve);

    if let (true, Some(start), Some(end)) = (solve, generated.start(), generated.end()) {
        let config = SolveConfig::new(start.to_string(), end.to_string())
            .with_max_ladder_length(ladder_length);
        let result = solve_puzzle(registry, &config)?;
        print_solve_result(&result, false);
    }
    Ok(())
}
