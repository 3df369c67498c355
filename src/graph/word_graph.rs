//! One-letter-difference graph over a fixed-length word list
//!
//! Words live in an arena indexed by [`WordId`]; adjacency is stored as id
//! lists on each word.

use crate::core::{Word, WordId, normalize};
use crate::errors::{LoadError, PuzzleError};
use crate::wordlists::parse_word_list;
use rustc_hash::FxHashMap;

/// All words of one length, linked to the words one letter away
#[derive(Debug)]
pub struct WordGraph {
    word_length: usize,
    words: Vec<Word>,
    index: FxHashMap<String, WordId>,
}

impl WordGraph {
    /// Build a graph from already validated words
    ///
    /// Duplicates collapse to the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::BadEntryLength` if any word is not `word_length`
    /// letters long.
    pub fn from_words(
        word_length: usize,
        words: impl IntoIterator<Item = Word>,
    ) -> Result<Self, LoadError> {
        let mut arena: Vec<Word> = Vec::new();
        let mut index: FxHashMap<String, WordId> = FxHashMap::default();

        for word in words {
            if word.len() != word_length {
                return Err(LoadError::BadEntryLength {
                    length: word.len(),
                    word: word.text().to_string(),
                    expected: word_length,
                });
            }
            if !index.contains_key(word.text()) {
                index.insert(word.text().to_string(), WordId::new(arena.len()));
                arena.push(word);
            }
        }

        link_variations(&mut arena);

        Ok(Self {
            word_length,
            words: arena,
            index,
        })
    }

    /// Parse a word list and build its graph
    ///
    /// # Errors
    ///
    /// Any error from [`parse_word_list`].
    ///
    /// # Examples
    /// ```
    /// use word_ladder::graph::WordGraph;
    ///
    /// let graph = WordGraph::parse(3, "cat\ncot\ndog\n").unwrap();
    /// let cat = graph.get("cat").unwrap();
    /// let cot = graph.get("cot").unwrap();
    ///
    /// assert_eq!(graph.links(cat), &[cot]);
    /// assert!(graph.word(graph.get("dog").unwrap()).is_island());
    /// ```
    pub fn parse(word_length: usize, content: &str) -> Result<Self, LoadError> {
        Self::from_words(word_length, parse_word_list(word_length, content)?)
    }

    /// Length of every word in the graph
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by id
    ///
    /// # Panics
    /// Panics if the id was not issued by this graph.
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id.index()]
    }

    /// Neighbors of a word
    #[inline]
    #[must_use]
    pub fn links(&self, id: WordId) -> &[WordId] {
        self.word(id).links()
    }

    /// All word ids
    pub fn ids(&self) -> impl Iterator<Item = WordId> + '_ {
        (0..self.words.len()).map(WordId::new)
    }

    /// Id of a word, case-insensitively
    #[must_use]
    pub fn get(&self, text: &str) -> Option<WordId> {
        self.index.get(&normalize(text.trim())).copied()
    }

    /// Resolve puzzle input to a word that can take part in a ladder
    ///
    /// # Errors
    ///
    /// `PuzzleError::NotFound` if the word is not in the dictionary, or
    /// `PuzzleError::IslandWord` if it has no neighbors.
    pub fn resolve(&self, text: &str) -> Result<WordId, PuzzleError> {
        let word = normalize(text.trim());
        let id = self
            .get(&word)
            .ok_or_else(|| PuzzleError::NotFound { word: word.clone() })?;

        if self.word(id).is_island() {
            return Err(PuzzleError::IslandWord { word });
        }
        Ok(id)
    }

    /// Hamming distance between two words of this graph
    #[inline]
    #[must_use]
    pub fn differences(&self, a: WordId, b: WordId) -> usize {
        self.word(a).differences(self.word(b))
    }

    /// Number of words with no neighbors
    #[must_use]
    pub fn island_count(&self) -> usize {
        self.words.iter().filter(|w| w.is_island()).count()
    }
}

/// Link every pair of words that share a variation pattern
///
/// Bucketing by pattern replaces pairwise comparison: each word lands in
/// `word_length` buckets, and everything in one bucket differs only at the
/// wildcard position.
fn link_variations(words: &mut [Word]) {
    let mut buckets: FxHashMap<String, Vec<WordId>> = FxHashMap::default();
    for (i, word) in words.iter().enumerate() {
        for pattern in word.variation_patterns() {
            buckets.entry(pattern).or_default().push(WordId::new(i));
        }
    }

    let mut links: Vec<Vec<WordId>> = vec![Vec::new(); words.len()];
    for bucket in buckets.values().filter(|bucket| bucket.len() > 1) {
        for &id in bucket {
            links[id.index()].extend(bucket.iter().copied().filter(|&other| other != id));
        }
    }

    for (word, word_links) in words.iter_mut().zip(links) {
        word.set_links(word_links);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_graph() -> WordGraph {
        WordGraph::parse(3, "cat\ncot\ncog\ndog\ncat\niwi\nbat\n").unwrap()
    }

    fn texts(graph: &WordGraph, ids: &[WordId]) -> Vec<String> {
        ids.iter().map(|&id| graph.word(id).text().to_string()).collect()
    }

    #[test]
    fn duplicates_collapse() {
        let graph = small_graph();
        assert_eq!(graph.len(), 6);
        assert_eq!(graph.word_length(), 3);
    }

    #[test]
    fn links_are_one_letter_apart() {
        let graph = small_graph();
        for id in graph.ids() {
            for &linked in graph.links(id) {
                assert_eq!(graph.differences(id, linked), 1);
                assert_ne!(linked, id);
            }
        }
    }

    #[test]
    fn links_are_symmetric() {
        let graph = small_graph();
        for id in graph.ids() {
            for &linked in graph.links(id) {
                assert!(graph.links(linked).contains(&id));
            }
        }
    }

    #[test]
    fn expected_neighbors() {
        let graph = small_graph();
        let cat = graph.get("cat").unwrap();
        let cot = graph.get("COT").unwrap();

        assert_eq!(texts(&graph, graph.links(cat)), vec!["COT", "BAT"]);
        assert_eq!(texts(&graph, graph.links(cot)), vec!["CAT", "COG"]);
    }

    #[test]
    fn island_words() {
        let graph = small_graph();
        let iwi = graph.get("iwi").unwrap();

        assert!(graph.word(iwi).is_island());
        assert_eq!(graph.island_count(), 1);
    }

    #[test]
    fn resolve_word() {
        let graph = small_graph();

        assert_eq!(graph.resolve(" Cat ").unwrap(), graph.get("cat").unwrap());
        assert!(matches!(
            graph.resolve("zzz"),
            Err(PuzzleError::NotFound { ref word }) if word == "ZZZ"
        ));
        assert!(matches!(
            graph.resolve("iwi"),
            Err(PuzzleError::IslandWord { ref word }) if word == "IWI"
        ));
    }

    #[test]
    fn from_words_rejects_wrong_length() {
        let words = vec![Word::new("cat").unwrap(), Word::new("cats").unwrap()];
        assert!(matches!(
            WordGraph::from_words(3, words),
            Err(LoadError::BadEntryLength { length: 4, expected: 3, .. })
        ));
    }

    #[test]
    fn punctuated_and_accented_words_link() {
        let graph = WordGraph::parse(4, "o'er\nover\never\ncafé\ncafe\n").unwrap();
        let oer = graph.resolve("O'ER").unwrap();
        let cafe = graph.resolve("Café").unwrap();

        assert_eq!(texts(&graph, graph.links(oer)), vec!["OVER"]);
        assert_eq!(texts(&graph, graph.links(cafe)), vec!["CAFE"]);
        assert_eq!(graph.island_count(), 0);

        let graph = WordGraph::parse(5, "x-ray\nx-ra_\n");
        assert!(matches!(graph, Err(LoadError::InvalidEntry { .. })));
    }

    /// Every word over `alphabet` with `word_length` letters, one per line
    fn synthetic_word_list(alphabet: &[char], word_length: usize) -> String {
        let mut words = vec![String::new()];
        for _ in 0..word_length {
            words = words
                .iter()
                .flat_map(|prefix| alphabet.iter().map(move |c| format!("{prefix}{c}")))
                .collect();
        }
        words.join("\n")
    }

    #[test]
    fn large_dictionary_links_by_pattern() {
        let alphabet: Vec<char> = ('a'..='h').collect();
        let graph = WordGraph::parse(5, &synthetic_word_list(&alphabet, 5)).unwrap();

        assert_eq!(graph.len(), 32_768);
        assert_eq!(graph.island_count(), 0);
        // 5 positions, 7 other letters each
        assert!(graph.ids().all(|id| graph.links(id).len() == 35));

        let aaaaa = graph.get("aaaaa").unwrap();
        assert!(graph.links(aaaaa).iter().all(|&id| graph.differences(aaaaa, id) == 1));
    }

    #[test]
    fn empty_graph() {
        let graph = WordGraph::parse(5, "\n\n").unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.ids().count(), 0);
    }
}
