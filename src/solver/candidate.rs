//! Partial ladders explored by the solver
//!
//! A candidate is owned by exactly one search branch. Extending it copies the
//! ladder and visited set, so sibling branches never share state.

use crate::core::WordId;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone)]
pub(crate) struct CandidateSolution {
    ladder: Vec<WordId>,
    seen: FxHashSet<WordId>,
}

impl CandidateSolution {
    /// One-word ladder the search starts from
    pub(crate) fn seed(start: WordId) -> Self {
        let mut seen = FxHashSet::default();
        seen.insert(start);
        Self {
            ladder: vec![start],
            seen,
        }
    }

    /// Copy of this ladder with one more word
    #[must_use]
    pub(crate) fn extend(&self, next: WordId) -> Self {
        let mut ladder = Vec::with_capacity(self.ladder.len() + 1);
        ladder.extend_from_slice(&self.ladder);
        ladder.push(next);

        let mut seen = self.seen.clone();
        seen.insert(next);

        Self { ladder, seen }
    }

    #[inline]
    pub(crate) fn last(&self) -> WordId {
        // Every candidate is created with at least one word
        self.ladder[self.ladder.len() - 1]
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.ladder.len()
    }

    #[inline]
    pub(crate) fn contains(&self, word: WordId) -> bool {
        self.seen.contains(&word)
    }

    pub(crate) fn into_ladder(self) -> Vec<WordId> {
        self.ladder
    }
}
