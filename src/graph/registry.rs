//! Per-length cache of word graphs
//!
//! Each length is built at most once, even when several threads ask for it at
//! the same time; later callers share the same `Arc`.

use super::WordGraph;
use crate::errors::LoadError;
use crate::wordlists::WordListSource;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

type Slot = Arc<Mutex<Option<Arc<WordGraph>>>>;

/// Lazily built, memoized word graphs keyed by word length
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use word_ladder::graph::GraphRegistry;
///
/// let registry = GraphRegistry::default();
/// let first = registry.for_length(3).unwrap();
/// let again = registry.for_length(3).unwrap();
/// assert!(Arc::ptr_eq(&first, &again));
/// ```
#[derive(Debug, Default)]
pub struct GraphRegistry {
    source: WordListSource,
    slots: Mutex<FxHashMap<usize, Slot>>,
}

impl GraphRegistry {
    /// Registry reading word lists from the given source
    #[must_use]
    pub fn new(source: WordListSource) -> Self {
        Self {
            source,
            slots: Mutex::new(FxHashMap::default()),
        }
    }

    /// Where this registry loads word lists from
    #[must_use]
    pub const fn source(&self) -> &WordListSource {
        &self.source
    }

    /// Graph for a word length, built on first use
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the word list is missing or malformed. Failed
    /// builds are not cached.
    pub fn for_length(&self, word_length: usize) -> Result<Arc<WordGraph>, LoadError> {
        let slot = {
            let mut slots = lock(&self.slots);
            Arc::clone(slots.entry(word_length).or_default())
        };

        // Holding the slot while building makes concurrent callers for the same
        // length wait for this build instead of starting their own
        let mut graph = lock(&slot);
        if let Some(cached) = graph.as_ref() {
            return Ok(Arc::clone(cached));
        }

        let built = match self.build(word_length) {
            Ok(built) => Arc::new(built),
            Err(e) => {
                drop(graph);
                self.discard_empty(word_length, &slot);
                return Err(e);
            }
        };
        *graph = Some(Arc::clone(&built));
        Ok(built)
    }

    /// Graph for the length of a word
    ///
    /// # Errors
    ///
    /// Same as [`for_length`](Self::for_length).
    pub fn for_word(&self, word: &str) -> Result<Arc<WordGraph>, LoadError> {
        self.for_length(word.trim().chars().count())
    }

    /// Word lengths whose graphs are already built
    ///
    /// Waits for builds in progress, without blocking other lengths.
    #[must_use]
    pub fn cached_lengths(&self) -> Vec<usize> {
        let slots: Vec<(usize, Slot)> = lock(&self.slots)
            .iter()
            .map(|(&length, slot)| (length, Arc::clone(slot)))
            .collect();

        let mut lengths: Vec<usize> = slots
            .into_iter()
            .filter(|(_, slot)| lock(slot).is_some())
            .map(|(length, _)| length)
            .collect();
        lengths.sort_unstable();
        lengths
    }

    /// Drop the slot of a failed build, unless another caller has taken it over
    fn discard_empty(&self, word_length: usize, slot: &Slot) {
        let mut slots = lock(&self.slots);
        let unused = slots.get(&word_length).is_some_and(|current| {
            Arc::ptr_eq(current, slot)
                && matches!(current.try_lock(), Ok(ref graph) if graph.is_none())
        });
        if unused {
            slots.remove(&word_length);
        }
    }

    fn build(&self, word_length: usize) -> Result<WordGraph, LoadError> {
        let start = Instant::now();
        let words = self.source.load(word_length)?;
        let graph = WordGraph::from_words(word_length, words)?;

        log::info!(
            "Built {word_length}-letter word graph: {} words, {} islands in {:.1?}",
            graph.len(),
            graph.island_count(),
            start.elapsed()
        );
        Ok(graph)
    }
}

/// A panic while building leaves the slot empty, so a poisoned lock is still usable
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn loads_every_embedded_length() {
        let registry = GraphRegistry::default();
        for word_length in 2..=15 {
            let graph = registry.for_length(word_length).unwrap();
            assert!(!graph.is_empty());
            assert_eq!(graph.word_length(), word_length);
        }
    }

    #[test]
    fn lengths_outside_range_fail() {
        let registry = GraphRegistry::default();
        assert!(matches!(
            registry.for_length(1),
            Err(LoadError::NoResource { word_length: 1 })
        ));
        assert!(matches!(
            registry.for_length(16),
            Err(LoadError::NoResource { word_length: 16 })
        ));
        assert!(registry.cached_lengths().is_empty());
    }

    #[test]
    fn failed_lengths_leave_no_slots() {
        let registry = GraphRegistry::default();
        for word_length in [1, 16, 40, 40, 1000] {
            assert!(registry.for_length(word_length).is_err());
        }
        assert!(lock(&registry.slots).is_empty());

        registry.for_length(3).unwrap();
        assert!(registry.for_length(40).is_err());
        assert_eq!(lock(&registry.slots).len(), 1);
        assert_eq!(registry.cached_lengths(), vec![3]);
    }

    #[test]
    fn failed_build_can_be_retried() {
        let registry = GraphRegistry::default();
        let _ = registry.for_length(99);
        let failures: Vec<bool> = (0..8)
            .into_par_iter()
            .map(|_| registry.for_length(99).is_err())
            .collect();

        assert!(failures.iter().all(|&failed| failed));
        assert!(registry.cached_lengths().is_empty());
    }

    #[test]
    fn graphs_are_cached() {
        let registry = GraphRegistry::default();
        let first = registry.for_length(4).unwrap();
        let second = registry.for_word("cold").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.cached_lengths(), vec![4]);
    }

    #[test]
    fn concurrent_first_access_builds_once() {
        let registry = GraphRegistry::default();

        let graphs: Vec<Arc<WordGraph>> = (0..16)
            .into_par_iter()
            .map(|_| registry.for_length(5).unwrap())
            .collect();

        assert!(graphs.iter().all(|g| Arc::ptr_eq(g, &graphs[0])));
    }

    #[test]
    fn cat_is_linked_and_iwi_is_an_island() {
        let registry = GraphRegistry::default();
        let graph = registry.for_length(3).unwrap();

        let cat = graph.get("cat").unwrap();
        assert!(!graph.links(cat).is_empty());
        assert!(!graph.links(cat).contains(&cat));

        let iwi = graph.get("IWI").unwrap();
        assert!(graph.word(iwi).is_island());
    }

    #[test]
    fn directory_source_matches_embedded() {
        let from_dir = GraphRegistry::new(WordListSource::directory(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/data"
        )));
        let embedded = GraphRegistry::default();

        assert_eq!(
            from_dir.for_length(4).unwrap().len(),
            embedded.for_length(4).unwrap().len()
        );
    }
}
