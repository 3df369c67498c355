//! Finished word ladders

use super::candidate::CandidateSolution;
use crate::core::{Word, WordId};
use crate::graph::WordGraph;
use std::cmp::Ordering;
use std::fmt;

/// A complete ladder from the puzzle's start word to its end word
///
/// Ordered by length, then by the interior words alphabetically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<'g> {
    ladder: Vec<&'g Word>,
}

impl<'g> Solution<'g> {
    /// Resolve a ladder of ids against its graph
    #[must_use]
    pub fn from_ids(graph: &'g WordGraph, ids: &[WordId]) -> Self {
        Self {
            ladder: ids.iter().map(|&id| graph.word(id)).collect(),
        }
    }

    /// Finish a candidate, flipping it back if the search ran end to start
    pub(crate) fn from_candidate(
        graph: &'g WordGraph,
        candidate: CandidateSolution,
        reversed: bool,
    ) -> Self {
        let mut ids = candidate.into_ladder();
        if reversed {
            ids.reverse();
        }
        Self::from_ids(graph, &ids)
    }

    /// Words of the ladder, start first
    #[inline]
    #[must_use]
    pub fn ladder(&self) -> &[&'g Word] {
        &self.ladder
    }

    /// Number of words, both endpoints included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ladder.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ladder.is_empty()
    }

    /// The ladder as upper-case strings
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.ladder.iter().map(|w| w.text().to_string()).collect()
    }

    /// Every step changes one letter and no word repeats
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let steps_ok = self
            .ladder
            .windows(2)
            .all(|pair| pair[0].differences(pair[1]) == 1);
        let distinct = self
            .ladder
            .iter()
            .enumerate()
            .all(|(i, word)| !self.ladder[..i].contains(word));
        steps_ok && distinct
    }
}

impl Ord for Solution<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let interior = |s: &Self| {
            let end = s.ladder.len().saturating_sub(1);
            s.ladder
                .get(1..end)
                .unwrap_or_default()
                .iter()
                .map(|w| w.text())
                .collect::<Vec<_>>()
        };

        self.len()
            .cmp(&other.len())
            .then_with(|| interior(self).cmp(&interior(other)))
            // Endpoints are shared within one solve; this keeps Ord consistent with Eq
            .then_with(|| self.texts().cmp(&other.texts()))
    }
}

impl PartialOrd for Solution<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Solution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.texts().join(", "))
    }
}
