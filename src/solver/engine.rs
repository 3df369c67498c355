//! Main word ladder solver interface

use super::candidate::CandidateSolution;
use super::distance::DistanceMap;
use super::solution::Solution;
use crate::core::WordId;
use crate::graph::WordGraph;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Every ladder found by one solve, plus how many branches were explored
#[derive(Debug, Clone)]
pub struct SolveOutcome<'g> {
    /// Sorted by length, then by interior words
    pub solutions: Vec<Solution<'g>>,
    pub explored: u64,
}

/// Finds all ladders between two words up to a maximum length
///
/// Coordinates the short-circuits, the distance-map pruning and the parallel
/// branch expansion.
pub struct Solver<'g> {
    graph: &'g WordGraph,
    start: WordId,
    end: WordId,
    max_ladder_length: usize,
}

impl<'g> Solver<'g> {
    /// Create a new solver for two words of the same graph
    ///
    /// # Parameters
    /// - `graph`: Graph both words were resolved against
    /// - `start`, `end`: Puzzle endpoints
    /// - `max_ladder_length`: Longest ladder to report, counted in words
    #[must_use]
    pub const fn new(
        graph: &'g WordGraph,
        start: WordId,
        end: WordId,
        max_ladder_length: usize,
    ) -> Self {
        Self {
            graph,
            start,
            end,
            max_ladder_length,
        }
    }

    #[must_use]
    pub const fn max_ladder_length(&self) -> usize {
        self.max_ladder_length
    }

    /// Same puzzle with a different bound
    #[must_use]
    pub const fn with_max_ladder_length(&self, max_ladder_length: usize) -> Self {
        Self::new(self.graph, self.start, self.end, max_ladder_length)
    }

    /// Find every ladder no longer than the bound
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::GraphRegistry;
    /// use word_ladder::solver::Solver;
    ///
    /// let registry = GraphRegistry::default();
    /// let graph = registry.for_length(3).unwrap();
    /// let cat = graph.resolve("cat").unwrap();
    /// let dog = graph.resolve("dog").unwrap();
    ///
    /// let outcome = Solver::new(&graph, cat, dog, 4).solve();
    /// assert_eq!(outcome.solutions.len(), 4);
    /// assert!(outcome.solutions.iter().all(|s| s.len() == 4));
    /// ```
    #[must_use]
    pub fn solve(&self) -> SolveOutcome<'g> {
        let max = self.max_ladder_length;
        if max < 1 {
            return self.short_circuit(Vec::new());
        }

        match self.graph.differences(self.start, self.end) {
            0 => self.short_circuit(vec![vec![self.start]]),
            1 if max >= 2 => self.short_circuit(vec![vec![self.start, self.end]]),
            1 => self.short_circuit(Vec::new()),
            2 if max == 3 => {
                let ladders = self
                    .common_links()
                    .into_iter()
                    .map(|middle| vec![self.start, middle, self.end])
                    .collect();
                self.short_circuit(ladders)
            }
            _ => self.search(),
        }
    }

    /// Length of the shortest possible ladder, or `None` if the words are not
    /// connected
    ///
    /// Ignores the configured bound.
    #[must_use]
    pub fn minimum_ladder_length(&self) -> Option<usize> {
        match self.graph.differences(self.start, self.end) {
            0 => return Some(1),
            1 => return Some(2),
            2 if !self.common_links().is_empty() => return Some(3),
            _ => {}
        }

        let (from, to, _) = self.orientation();
        DistanceMap::new(self.graph, from).distance(to)
    }

    /// Whether any ladder exists at all
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.minimum_ladder_length().is_some()
    }

    /// Neighbors shared by both endpoints, in the start word's link order
    fn common_links(&self) -> Vec<WordId> {
        let end_links: FxHashSet<WordId> = self.graph.links(self.end).iter().copied().collect();
        self.graph
            .links(self.start)
            .iter()
            .copied()
            .filter(|id| end_links.contains(id))
            .collect()
    }

    /// Begin from the endpoint with fewer links, to limit the first fan-out
    ///
    /// Returns `(begin, target, reversed)`.
    fn orientation(&self) -> (WordId, WordId, bool) {
        let reversed = self.graph.links(self.start).len() > self.graph.links(self.end).len();
        if reversed {
            (self.end, self.start, true)
        } else {
            (self.start, self.end, false)
        }
    }

    fn short_circuit(&self, ladders: Vec<Vec<WordId>>) -> SolveOutcome<'g> {
        let mut solutions: Vec<Solution<'g>> = ladders
            .iter()
            .map(|ids| Solution::from_ids(self.graph, ids))
            .collect();
        solutions.sort();
        SolveOutcome {
            solutions,
            explored: 0,
        }
    }

    fn search(&self) -> SolveOutcome<'g> {
        let (begin, target, reversed) = self.orientation();
        let distances = DistanceMap::bounded(self.graph, target, self.max_ladder_length);

        log::debug!(
            "Searching {} -> {} (reversed: {reversed}, max ladder {}, {} words within reach)",
            self.graph.word(begin),
            self.graph.word(target),
            self.max_ladder_length,
            distances.len()
        );

        let search = BranchSearch {
            graph: self.graph,
            target,
            distances: &distances,
            max_ladder_length: self.max_ladder_length,
            found: Mutex::new(Vec::new()),
            explored: AtomicU64::new(0),
        };
        search.expand(&CandidateSolution::seed(begin));

        let explored = search.explored.into_inner();
        let found = search
            .found
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let mut solutions: Vec<Solution<'g>> = found
            .into_iter()
            .map(|candidate| Solution::from_candidate(self.graph, candidate, reversed))
            .collect();
        solutions.sort();

        log::debug!(
            "Found {} solutions, explored {explored} branches",
            solutions.len()
        );

        SolveOutcome {
            solutions,
            explored,
        }
    }
}

/// Shared state of one parallel search
///
/// Only `found` and `explored` are written during the search; each branch's
/// candidate is private to the task expanding it.
struct BranchSearch<'a> {
    graph: &'a WordGraph,
    target: WordId,
    distances: &'a DistanceMap,
    max_ladder_length: usize,
    found: Mutex<Vec<CandidateSolution>>,
    explored: AtomicU64,
}

impl BranchSearch<'_> {
    fn expand(&self, candidate: &CandidateSolution) {
        let last = candidate.last();
        if last == self.target {
            self.found
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push(candidate.clone());
            return;
        }

        self.graph
            .links(last)
            .par_iter()
            .filter(|&&next| {
                !candidate.contains(next)
                    && self.distances.reachable_within(
                        next,
                        self.max_ladder_length,
                        candidate.len(),
                    )
            })
            .for_each(|&next| {
                let branch = candidate.extend(next);
                self.explored.fetch_add(1, Ordering::Relaxed);
                self.expand(&branch);
            });
    }
}
