//! Puzzle definition
//!
//! A puzzle is a start word and a final word of the same length, both present
//! in the dictionary and both linked to at least one other word.

use crate::core::{Word, WordId, normalize};
use crate::errors::PuzzleError;
use crate::graph::{GraphRegistry, WordGraph};
use crate::solver::Solver;
use std::sync::Arc;

/// Longest ladder searched when no bound is given
pub const DEFAULT_MAXIMUM_LADDER_LENGTH: usize = 6;

/// Solve options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Longest ladder to report; 0 means "use the shortest possible length"
    pub max_ladder_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_ladder_length: DEFAULT_MAXIMUM_LADDER_LENGTH,
        }
    }
}

impl Options {
    #[must_use]
    pub const fn with_max_ladder_length(max_ladder_length: usize) -> Self {
        Self { max_ladder_length }
    }
}

/// Start and final word, resolved against one word graph
#[derive(Debug, Clone, Default)]
pub struct Puzzle {
    graph: Option<Arc<WordGraph>>,
    start: Option<WordId>,
    end: Option<WordId>,
}

impl Puzzle {
    /// Puzzle with both words set
    ///
    /// # Errors
    ///
    /// See [`set_start_word`](Self::set_start_word) and
    /// [`set_final_word`](Self::set_final_word).
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::GraphRegistry;
    /// use word_ladder::puzzle::{Options, Puzzle};
    ///
    /// let registry = GraphRegistry::default();
    /// let puzzle = Puzzle::new(&registry, "cold", "warm").unwrap();
    ///
    /// let (solver, max) = puzzle.solver(Options::with_max_ladder_length(0)).unwrap();
    /// assert_eq!(max, 5);
    /// assert!(!solver.solve().solutions.is_empty());
    /// ```
    pub fn new(registry: &GraphRegistry, start: &str, end: &str) -> Result<Self, PuzzleError> {
        let mut puzzle = Self::default();
        puzzle.set_start_word(registry, start)?;
        puzzle.set_final_word(end)?;
        Ok(puzzle)
    }

    /// Set the start word, choosing the dictionary by its length
    ///
    /// Clears any final word. On error the puzzle is left unchanged.
    ///
    /// # Errors
    ///
    /// `PuzzleError::Load` if there is no dictionary for the word's length,
    /// `NotFound` or `IslandWord` if the word cannot start a ladder.
    pub fn set_start_word(
        &mut self,
        registry: &GraphRegistry,
        start: &str,
    ) -> Result<(), PuzzleError> {
        let graph = registry.for_word(start)?;
        let start = graph.resolve(start)?;

        self.graph = Some(graph);
        self.start = Some(start);
        self.end = None;
        Ok(())
    }

    /// Set the final word
    ///
    /// On error the puzzle is left unchanged.
    ///
    /// # Errors
    ///
    /// `StartWordNotSet` before a start word, `LengthMismatch` if the lengths
    /// differ, `NotFound` or `IslandWord` if the word cannot end a ladder.
    pub fn set_final_word(&mut self, end: &str) -> Result<(), PuzzleError> {
        let graph = self.graph.as_ref().ok_or(PuzzleError::StartWordNotSet)?;

        let end = end.trim();
        let length = end.chars().count();
        if length != graph.word_length() {
            return Err(PuzzleError::LengthMismatch {
                word: normalize(end),
                length,
                expected: graph.word_length(),
            });
        }

        self.end = Some(graph.resolve(end)?);
        Ok(())
    }

    /// Forget both words
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn start_word(&self) -> Option<&Word> {
        Some(self.graph.as_ref()?.word(self.start?))
    }

    #[must_use]
    pub fn final_word(&self) -> Option<&Word> {
        Some(self.graph.as_ref()?.word(self.end?))
    }

    /// Dictionary the words were resolved against
    #[must_use]
    pub fn graph(&self) -> Option<&WordGraph> {
        self.graph.as_deref()
    }

    /// Whether both words are set
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.graph.is_some() && self.start.is_some() && self.end.is_some()
    }

    /// Solver for this puzzle and the bound it will use
    ///
    /// A `max_ladder_length` of 0 is replaced by the minimum ladder length, or
    /// stays 0 (no solutions) when the words are not connected.
    ///
    /// # Errors
    ///
    /// `PuzzleError::Incomplete` unless both words are set.
    pub fn solver(&self, options: Options) -> Result<(Solver<'_>, usize), PuzzleError> {
        let (Some(graph), Some(start), Some(end)) = (self.graph.as_deref(), self.start, self.end)
        else {
            return Err(PuzzleError::Incomplete);
        };

        let solver = Solver::new(graph, start, end, options.max_ladder_length);
        if options.max_ladder_length > 0 {
            return Ok((solver, options.max_ladder_length));
        }

        let max = solver.minimum_ladder_length().unwrap_or(0);
        log::debug!("Using minimum ladder length {max} as the bound");
        Ok((solver.with_max_ladder_length(max), max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LoadError;

    #[test]
    fn new_puzzle_resolves_both_words() {
        let registry = GraphRegistry::default();
        let puzzle = Puzzle::new(&registry, "cat", "DOG").unwrap();

        assert_eq!(puzzle.start_word().unwrap().text(), "CAT");
        assert_eq!(puzzle.final_word().unwrap().text(), "DOG");
        assert!(puzzle.is_complete());
    }

    #[test]
    fn unknown_start_word() {
        let registry = GraphRegistry::default();
        assert!(matches!(
            Puzzle::new(&registry, "qzx", "dog"),
            Err(PuzzleError::NotFound { ref word }) if word == "QZX"
        ));
    }

    #[test]
    fn island_words_rejected() {
        let registry = GraphRegistry::default();
        assert!(matches!(
            Puzzle::new(&registry, "iwi", "dog"),
            Err(PuzzleError::IslandWord { ref word }) if word == "IWI"
        ));
        assert!(matches!(
            Puzzle::new(&registry, "cat", "iwi"),
            Err(PuzzleError::IslandWord { .. })
        ));
    }

    #[test]
    fn final_word_needs_start_word() {
        let mut puzzle = Puzzle::default();
        assert!(matches!(
            puzzle.set_final_word("dog"),
            Err(PuzzleError::StartWordNotSet)
        ));
    }

    #[test]
    fn final_word_length_must_match() {
        let registry = GraphRegistry::default();
        let mut puzzle = Puzzle::default();
        puzzle.set_start_word(&registry, "cat").unwrap();

        assert!(matches!(
            puzzle.set_final_word("cold"),
            Err(PuzzleError::LengthMismatch {
                length: 4,
                expected: 3,
                ..
            })
        ));
        assert!(puzzle.final_word().is_none());
    }

    #[test]
    fn rejected_input_keeps_previous_state() {
        let registry = GraphRegistry::default();
        let mut puzzle = Puzzle::new(&registry, "cat", "dog").unwrap();

        assert!(puzzle.set_final_word("zzz").is_err());
        assert_eq!(puzzle.final_word().unwrap().text(), "DOG");

        assert!(puzzle.set_start_word(&registry, "iwi").is_err());
        assert_eq!(puzzle.start_word().unwrap().text(), "CAT");
        assert!(puzzle.is_complete());
    }

    #[test]
    fn new_start_word_clears_final_word() {
        let registry = GraphRegistry::default();
        let mut puzzle = Puzzle::new(&registry, "cat", "dog").unwrap();

        puzzle.set_start_word(&registry, "cold").unwrap();
        assert_eq!(puzzle.start_word().unwrap().text(), "COLD");
        assert!(puzzle.final_word().is_none());
        assert!(matches!(
            puzzle.solver(Options::default()),
            Err(PuzzleError::Incomplete)
        ));
    }

    #[test]
    fn unsupported_length() {
        let registry = GraphRegistry::default();
        assert!(matches!(
            Puzzle::new(&registry, "a", "b"),
            Err(PuzzleError::Load(LoadError::NoResource { word_length: 1 }))
        ));
    }

    #[test]
    fn clear_forgets_everything() {
        let registry = GraphRegistry::default();
        let mut puzzle = Puzzle::new(&registry, "cat", "dog").unwrap();
        puzzle.clear();

        assert!(puzzle.start_word().is_none());
        assert!(puzzle.graph().is_none());
        assert!(!puzzle.is_complete());
    }

    #[test]
    fn zero_bound_uses_minimum() {
        let registry = GraphRegistry::default();
        let puzzle = Puzzle::new(&registry, "cat", "dog").unwrap();

        let (solver, max) = puzzle.solver(Options::with_max_ladder_length(0)).unwrap();
        assert_eq!(max, 4);
        assert_eq!(solver.solve().solutions.len(), 4);

        let (_, max) = puzzle.solver(Options::default()).unwrap();
        assert_eq!(max, DEFAULT_MAXIMUM_LADDER_LENGTH);
    }

    #[test]
    fn zero_bound_on_disconnected_words() {
        let registry = GraphRegistry::default();
        let puzzle = Puzzle::new(&registry, "llama", "artsy").unwrap();

        let (solver, max) = puzzle.solver(Options::with_max_ladder_length(0)).unwrap();
        assert_eq!(max, 0);
        assert!(solver.solve().solutions.is_empty());
    }
}
