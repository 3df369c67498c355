//! Ladder solving command
//!
//! Solves a puzzle between two words and returns every ladder found.

use crate::core::normalize;
use crate::errors::PuzzleError;
use crate::graph::GraphRegistry;
use crate::puzzle::{Options, Puzzle};
use std::time::{Duration, Instant};

/// Configuration for solving a puzzle
pub struct SolveConfig {
    pub start: String,
    pub end: String,
    /// 0 solves at the minimum ladder length
    pub max_ladder_length: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, end: String) -> Self {
        Self {
            start,
            end,
            max_ladder_length: 0,
        }
    }

    #[must_use]
    pub const fn with_max_ladder_length(mut self, max_ladder_length: usize) -> Self {
        self.max_ladder_length = max_ladder_length;
        self
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub start: String,
    pub end: String,
    /// Bound the solver actually used
    pub max_ladder_length: usize,
    /// Shortest possible ladder, `None` if the words are not connected
    pub minimum: Option<usize>,
    /// Sorted by length, then by interior words
    pub solutions: Vec<Vec<String>>,
    pub explored: u64,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.solutions.is_empty()
    }
}

/// Solve the puzzle described by `config`
///
/// # Errors
///
/// Returns a `PuzzleError` if either word is rejected or its word list cannot
/// be loaded.
pub fn solve_puzzle(
    registry: &GraphRegistry,
    config: &SolveConfig,
) -> Result<SolveResult, PuzzleError> {
    let puzzle = Puzzle::new(registry, &config.start, &config.end)?;
    let (solver, max_ladder_length) =
        puzzle.solver(Options::with_max_ladder_length(config.max_ladder_length))?;

    let started = Instant::now();
    let outcome = solver.solve();
    let duration = started.elapsed();
    let minimum = solver.minimum_ladder_length();

    log::info!(
        "Solved {} -> {} in {:.3}s: {} solutions, {} branches explored",
        normalize(config.start.trim()),
        normalize(config.end.trim()),
        duration.as_secs_f64(),
        outcome.solutions.len(),
        outcome.explored
    );

    Ok(SolveResult {
        start: normalize(config.start.trim()),
        end: normalize(config.end.trim()),
        max_ladder_length,
        minimum,
        solutions: outcome.solutions.iter().map(|s| s.texts()).collect(),
        explored: outcome.explored,
        duration,
    })
}

/// Length of the shortest ladder between two words
///
/// # Errors
///
/// Returns a `PuzzleError` if either word is rejected.
pub fn minimum_length(
    registry: &GraphRegistry,
    start: &str,
    end: &str,
) -> Result<Option<usize>, PuzzleError> {
    let puzzle = Puzzle::new(registry, start, end)?;
    let (solver, _) = puzzle.solver(Options::default())?;
    Ok(solver.minimum_ladder_length())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(start: &str, end: &str, max: usize) -> SolveResult {
        let registry = GraphRegistry::default();
        let config = SolveConfig::new(start.to_string(), end.to_string()).with_max_ladder_length(max);
        solve_puzzle(&registry, &config).unwrap()
    }

    #[test]
    fn solve_at_minimum_length() {
        let result = solve("cat", "dog", 0);

        assert_eq!(result.start, "CAT");
        assert_eq!(result.end, "DOG");
        assert_eq!(result.max_ladder_length, 4);
        assert_eq!(result.minimum, Some(4));
        assert_eq!(result.solutions.len(), 4);
        assert_eq!(result.explored, 11);
        assert!(result.is_solved());
    }

    #[test]
    fn solve_with_explicit_bound() {
        let result = solve("cold", "warm", 5);

        assert_eq!(result.max_ladder_length, 5);
        assert_eq!(result.solutions.len(), 3);
        for ladder in &result.solutions {
            assert_eq!(ladder.first().map(String::as_str), Some("COLD"));
            assert_eq!(ladder.last().map(String::as_str), Some("WARM"));
        }
    }

    #[test]
    fn solutions_are_sorted() {
        let result = solve("cat", "bar", 4);

        assert_eq!(result.solutions.len(), 38);
        assert!(result.solutions.windows(2).all(|w| w[0].len() <= w[1].len()));
        assert_eq!(result.solutions[0].len(), 3);
    }

    #[test]
    fn disconnected_words_have_no_solutions() {
        let result = solve("llama", "artsy", 0);

        assert_eq!(result.minimum, None);
        assert_eq!(result.max_ladder_length, 0);
        assert!(!result.is_solved());
    }

    #[test]
    fn rejected_words() {
        let registry = GraphRegistry::default();
        let config = SolveConfig::new("cat".to_string(), "iwi".to_string());
        assert!(matches!(
            solve_puzzle(&registry, &config),
            Err(PuzzleError::IslandWord { .. })
        ));

        let config = SolveConfig::new("cat".to_string(), "cold".to_string());
        assert!(matches!(
            solve_puzzle(&registry, &config),
            Err(PuzzleError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn minimum_lengths() {
        let registry = GraphRegistry::default();
        assert_eq!(minimum_length(&registry, "cat", "dog").unwrap(), Some(4));
        assert_eq!(minimum_length(&registry, "kata", "java").unwrap(), Some(3));
        assert_eq!(minimum_length(&registry, "cat", "cat").unwrap(), Some(1));
        assert_eq!(minimum_length(&registry, "llama", "artsy").unwrap(), None);
        assert!(minimum_length(&registry, "qqq", "dog").is_err());
    }
}
