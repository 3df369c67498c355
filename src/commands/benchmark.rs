//! Benchmark command
//!
//! Generates random puzzles and solves each at its generated ladder length.

use super::generate::{DEFAULT_MAX_ATTEMPTS, GenerateConfig, generate_puzzle};
use crate::errors::{GeneratorError, PuzzleError};
use crate::graph::GraphRegistry;
use crate::puzzle::{Options, Puzzle};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub word_length: usize,
    pub ladder_length: usize,
    /// Number of puzzles to generate and solve
    pub count: usize,
    /// Generation attempts per puzzle
    pub max_attempts: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(word_length: usize, ladder_length: usize, count: usize) -> Self {
        Self {
            word_length,
            ladder_length,
            count,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub word_length: usize,
    pub ladder_length: usize,
    /// Puzzles generated and solved
    pub puzzles: usize,
    /// Puzzles whose generation ran out of attempts
    pub failed_generations: usize,
    pub total_solutions: usize,
    pub total_explored: u64,
    pub min_explored: u64,
    pub max_explored: u64,
    /// Puzzle count keyed by minimum ladder length
    pub minimum_distribution: FxHashMap<usize, usize>,
    pub solve_duration: Duration,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn average_explored(&self) -> f64 {
        if self.puzzles == 0 {
            return 0.0;
        }
        self.total_explored as f64 / self.puzzles as f64
    }

    #[must_use]
    pub fn average_solutions(&self) -> f64 {
        if self.puzzles == 0 {
            return 0.0;
        }
        self.total_solutions as f64 / self.puzzles as f64
    }

    #[must_use]
    pub fn puzzles_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.puzzles as f64 / secs
        } else {
            0.0
        }
    }
}

/// Benchmark failure
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

fn progress_bar(config: &BenchmarkConfig) -> ProgressBar {
    if !config.show_progress {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(config.count as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

/// Run a benchmark over `config.count` generated puzzles
///
/// A puzzle whose generation runs out of attempts is counted in
/// `failed_generations` and skipped.
///
/// # Errors
///
/// Returns an error if the generator cannot be set up for the configured
/// lengths.
pub fn run_benchmark<R: Rng + ?Sized>(
    registry: &GraphRegistry,
    config: &BenchmarkConfig,
    rng: &mut R,
) -> Result<BenchmarkResult, BenchmarkError> {
    let generate_config = GenerateConfig {
        word_length: config.word_length,
        ladder_length: config.ladder_length,
        max_attempts: config.max_attempts,
    };

    let pb = progress_bar(config);
    let started = Instant::now();

    let mut result = BenchmarkResult {
        word_length: config.word_length,
        ladder_length: config.ladder_length,
        puzzles: 0,
        failed_generations: 0,
        total_solutions: 0,
        total_explored: 0,
        min_explored: u64::MAX,
        max_explored: 0,
        minimum_distribution: FxHashMap::default(),
        solve_duration: Duration::ZERO,
        duration: Duration::ZERO,
    };

    for _ in 0..config.count {
        let generated = match generate_puzzle(registry, &generate_config, rng) {
            Ok(generated) => generated,
            Err(GeneratorError::RetriesExhausted { .. }) => {
                result.failed_generations += 1;
                pb.inc(1);
                continue;
            }
            Err(e) => {
                pb.abandon();
                return Err(e.into());
            }
        };

        let (Some(start), Some(end)) = (generated.start(), generated.end()) else {
            continue;
        };
        pb.set_message(format!("{start} -> {end}"));

        let puzzle = Puzzle::new(registry, start, end)?;
        let (solver, _) =
            puzzle.solver(Options::with_max_ladder_length(config.ladder_length))?;

        let solve_started = Instant::now();
        let outcome = solver.solve();
        result.solve_duration += solve_started.elapsed();

        if let Some(minimum) = solver.minimum_ladder_length() {
            *result.minimum_distribution.entry(minimum).or_insert(0) += 1;
        }

        result.puzzles += 1;
        result.total_solutions += outcome.solutions.len();
        result.total_explored += outcome.explored;
        result.min_explored = result.min_explored.min(outcome.explored);
        result.max_explored = result.max_explored.max(outcome.explored);
        pb.inc(1);
    }

    pb.finish_and_clear();

    if result.puzzles == 0 {
        result.min_explored = 0;
    }
    result.duration = started.elapsed();

    log::info!(
        "Benchmarked {} puzzles ({} generation failures) in {:.2}s",
        result.puzzles,
        result.failed_generations,
        result.duration.as_secs_f64()
    );

    Ok(result)
}
