//! Random word ladder generation
//!
//! A constrained random walk: every step changes one letter, never the letter
//! changed by the step before, and never moves back towards the first word.
//! The walk does not backtrack; a dead end is reported as
//! [`Generation::Retry`] and the caller starts over.

use crate::core::{Word, WordId};
use crate::errors::GeneratorError;
use crate::graph::{GraphRegistry, WordGraph};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Result of one generation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation<'g> {
    /// A ladder of exactly the requested length
    Ladder(Vec<&'g Word>),
    /// The walk hit a dead end; start again with fresh randomness
    Retry,
}

impl<'g> Generation<'g> {
    /// The ladder, if the attempt succeeded
    #[must_use]
    pub fn ladder(self) -> Option<Vec<&'g Word>> {
        match self {
            Self::Ladder(words) => Some(words),
            Self::Retry => None,
        }
    }
}

/// Generates solvable ladders of a fixed word length and ladder length
#[derive(Debug)]
pub struct Generator {
    graph: Arc<WordGraph>,
    ladder_length: usize,
    linked: Vec<WordId>,
}

impl Generator {
    /// Generator over the registry's graph for `word_length`
    ///
    /// # Errors
    ///
    /// Fails if the word list cannot be loaded, or see [`from_graph`](Self::from_graph).
    pub fn new(
        registry: &GraphRegistry,
        word_length: usize,
        ladder_length: usize,
    ) -> Result<Self, GeneratorError> {
        Self::from_graph(registry.for_length(word_length)?, ladder_length)
    }

    /// Generator over an existing graph
    ///
    /// # Errors
    ///
    /// `GeneratorError::InvalidLadderLength` for a ladder length of 0, and
    /// `GeneratorError::NoLinkedWords` if the graph has no word with a neighbor.
    pub fn from_graph(graph: Arc<WordGraph>, ladder_length: usize) -> Result<Self, GeneratorError> {
        if ladder_length == 0 {
            return Err(GeneratorError::InvalidLadderLength(ladder_length));
        }

        let linked: Vec<WordId> = graph
            .ids()
            .filter(|&id| !graph.word(id).is_island())
            .collect();
        if linked.is_empty() {
            return Err(GeneratorError::NoLinkedWords {
                word_length: graph.word_length(),
            });
        }

        Ok(Self {
            graph,
            ladder_length,
            linked,
        })
    }

    #[must_use]
    pub const fn ladder_length(&self) -> usize {
        self.ladder_length
    }

    /// Try once to walk a ladder of the configured length
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::GraphRegistry;
    /// use word_ladder::solver::Generator;
    ///
    /// let registry = GraphRegistry::default();
    /// let generator = Generator::new(&registry, 4, 5).unwrap();
    ///
    /// let ladder = (0..100)
    ///     .find_map(|_| generator.generate(&mut rand::rng()).ladder())
    ///     .expect("a ladder within 100 attempts");
    /// assert_eq!(ladder.len(), 5);
    /// ```
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Generation<'_> {
        let Some(&first) = self.linked.choose(rng) else {
            return Generation::Retry;
        };

        let mut ladder = vec![first];
        let mut seen = FxHashSet::default();
        seen.insert(first);

        while ladder.len() < self.ladder_length {
            let current = ladder[ladder.len() - 1];
            let previous = ladder.len().checked_sub(2).map(|i| ladder[i]);

            let candidates = self.candidates(first, previous, current, &seen);
            let Some(&next) = candidates.choose(rng) else {
                log::debug!(
                    "Generation dead end at {} after {} of {} words",
                    self.graph.word(current),
                    ladder.len(),
                    self.ladder_length
                );
                return Generation::Retry;
            };

            seen.insert(next);
            ladder.push(next);
        }

        Generation::Ladder(ladder.into_iter().map(|id| self.graph.word(id)).collect())
    }

    /// Neighbors of `current` that keep the walk moving away from `first`
    fn candidates(
        &self,
        first: WordId,
        previous: Option<WordId>,
        current: WordId,
        seen: &FxHashSet<WordId>,
    ) -> Vec<WordId> {
        let graph = &*self.graph;
        let current_word = graph.word(current);
        let changed_at = previous.and_then(|p| current_word.first_difference(graph.word(p)));
        let divergence = graph.differences(first, current);

        graph
            .links(current)
            .iter()
            .copied()
            .filter(|id| !seen.contains(id))
            .filter(|&id| {
                changed_at.is_none() || graph.word(id).first_difference(current_word) != changed_at
            })
            .filter(|&id| graph.differences(first, id) >= divergence)
            .collect()
    }
}
