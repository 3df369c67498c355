//! Shortest ladder lengths from one word
//!
//! Breadth-first over the word graph. Distances are ladder lengths, so the
//! source itself is 1 and its neighbors are 2.

use crate::core::WordId;
use crate::graph::WordGraph;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Ladder length from a fixed source word to every word it can reach
#[derive(Debug, Clone)]
pub struct DistanceMap {
    source: WordId,
    distances: FxHashMap<WordId, usize>,
}

impl DistanceMap {
    /// Unbounded map covering the source's whole connected component
    #[must_use]
    pub fn new(graph: &WordGraph, source: WordId) -> Self {
        Self::build(graph, source, None)
    }

    /// Map that stops expanding at `max_depth`
    ///
    /// Words whose ladder length from the source would exceed `max_depth` are
    /// never recorded.
    #[must_use]
    pub fn bounded(graph: &WordGraph, source: WordId, max_depth: usize) -> Self {
        Self::build(graph, source, Some(max_depth))
    }

    fn build(graph: &WordGraph, source: WordId, max_depth: Option<usize>) -> Self {
        let mut distances = FxHashMap::default();
        distances.insert(source, 1);

        let mut queue = VecDeque::from([source]);
        while let Some(word) = queue.pop_front() {
            let distance = distances[&word];
            if max_depth.is_some_and(|max| distance >= max) {
                continue;
            }
            for &linked in graph.links(word) {
                distances.entry(linked).or_insert_with(|| {
                    queue.push_back(linked);
                    distance + 1
                });
            }
        }

        Self { source, distances }
    }

    /// The word the map was built from
    #[inline]
    #[must_use]
    pub const fn source(&self) -> WordId {
        self.source
    }

    /// Shortest ladder length from the source, if reachable
    #[inline]
    #[must_use]
    pub fn distance(&self, word: WordId) -> Option<usize> {
        self.distances.get(&word).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: WordId) -> bool {
        self.distances.contains_key(&word)
    }

    /// Whether a ladder from the source to `word` fits in `max_ladder_length`
    #[must_use]
    pub fn reachable(&self, word: WordId, max_ladder_length: usize) -> bool {
        self.distance(word)
            .is_some_and(|distance| distance <= max_ladder_length)
    }

    /// Whether a partial ladder of `partial_length` words can still reach the
    /// source through `word` without exceeding `max_ladder_length`
    #[must_use]
    pub fn reachable_within(
        &self,
        word: WordId,
        max_ladder_length: usize,
        partial_length: usize,
    ) -> bool {
        self.distance(word)
            .is_some_and(|distance| distance + partial_length <= max_ladder_length)
    }

    /// Number of words recorded, including the source
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Never true, the source is always present
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphRegistry;
    use std::sync::Arc;

    fn three_letter_graph() -> Arc<WordGraph> {
        GraphRegistry::default().for_length(3).unwrap()
    }

    #[test]
    fn island_word_has_single_entry() {
        let graph = three_letter_graph();
        let iwi = graph.get("iwi").unwrap();
        let map = DistanceMap::new(&graph, iwi);

        assert_eq!(map.len(), 1);
        assert_eq!(map.distance(iwi), Some(1));
        assert_eq!(map.source(), iwi);
    }

    #[test]
    fn cat_map() {
        let graph = three_letter_graph();
        let cat = graph.get("cat").unwrap();
        let dog = graph.get("dog").unwrap();
        let map = DistanceMap::new(&graph, cat);

        assert_eq!(map.len(), 446);
        assert_eq!(map.distance(cat), Some(1));
        assert_eq!(map.distance(dog), Some(4));

        assert!(map.reachable(dog, 5));
        assert!(map.reachable(dog, 4));
        assert!(!map.reachable(dog, 3));
        assert!(!map.reachable(dog, 2));
    }

    #[test]
    fn cat_map_bounded() {
        let graph = three_letter_graph();
        let cat = graph.get("cat").unwrap();
        let dog = graph.get("dog").unwrap();

        let map = DistanceMap::bounded(&graph, cat, 4);
        assert_eq!(map.len(), 320);
        assert!(map.reachable(dog, 4));
        assert!(!map.reachable(dog, 3));

        let map = DistanceMap::bounded(&graph, cat, 3);
        assert_eq!(map.len(), 136);
        assert!(!map.contains(dog));
        assert!(!map.reachable(dog, 10));
    }

    #[test]
    fn bound_of_one_keeps_only_source() {
        let graph = three_letter_graph();
        let cat = graph.get("cat").unwrap();

        assert_eq!(DistanceMap::bounded(&graph, cat, 1).len(), 1);
        assert_eq!(DistanceMap::bounded(&graph, cat, 0).len(), 1);
        assert_eq!(
            DistanceMap::bounded(&graph, cat, 2).len(),
            1 + graph.links(cat).len()
        );
    }

    #[test]
    fn neighbors_are_one_further() {
        let graph = three_letter_graph();
        let cat = graph.get("cat").unwrap();
        let map = DistanceMap::new(&graph, cat);

        for id in graph.ids().filter(|&id| map.contains(id)) {
            let distance = map.distance(id).unwrap();
            for &linked in graph.links(id) {
                let linked_distance = map.distance(linked).unwrap();
                assert!(linked_distance.abs_diff(distance) <= 1);
            }
        }
    }

    #[test]
    fn reachable_within_accounts_for_partial_ladder() {
        let graph = three_letter_graph();
        let dog = graph.get("dog").unwrap();
        let cog = graph.get("cog").unwrap();
        let map = DistanceMap::new(&graph, dog);

        // COG is 2 from DOG; with 2 words already placed the ladder is 4 long
        assert!(map.reachable_within(cog, 4, 2));
        assert!(!map.reachable_within(cog, 3, 2));
        assert!(map.reachable_within(dog, 1, 0));
    }
}
