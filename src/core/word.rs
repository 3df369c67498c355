//! Word ladder word representation
//!
//! A Word stores an upper-cased fixed-length word, its precomputed hash and the
//! ids of the words one letter away from it in its graph.

use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Wildcard marker used in variation patterns
pub const VARIATION_CHAR: char = '_';

/// Stable index of a word inside one word graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
    #[inline]
    #[must_use]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the word in its graph's arena
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A dictionary word with its one-letter neighbors
///
/// Equality and hashing use the letters only, never the links.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: Box<[char]>,
    hash: u64,
    links: Vec<WordId>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    ReservedCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::ReservedCharacter(ch) => {
                write!(f, "Word cannot contain reserved character '{ch}'")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Upper-case form used for storage and lookup
///
/// A letter whose upper case is more than one character (`ß`) is kept as is,
/// so the letter count never changes.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

impl Word {
    /// Create a new, unlinked Word from a string
    ///
    /// Any character is accepted except [`VARIATION_CHAR`]; letters are
    /// upper-cased.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains [`VARIATION_CHAR`].
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(word.text(), "CAT");
    /// assert_eq!(Word::new("x-ray").unwrap().len(), 5);
    ///
    /// assert!(Word::new("c_t").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.contains(VARIATION_CHAR) {
            return Err(WordError::ReservedCharacter(VARIATION_CHAR));
        }

        let mut hasher = FxHasher::default();
        text.hash(&mut hasher);

        Ok(Self {
            hash: hasher.finish(),
            letters: text.chars().collect(),
            text,
            links: Vec::new(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Count of positions where the two words differ (Hamming distance)
    ///
    /// Only the overlapping positions are compared.
    #[must_use]
    pub fn differences(&self, other: &Self) -> usize {
        self.letters
            .iter()
            .zip(other.letters())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Count of positions where the two words agree
    #[must_use]
    pub fn similarities(&self, other: &Self) -> usize {
        self.letters
            .iter()
            .zip(other.letters())
            .filter(|(a, b)| a == b)
            .count()
    }

    /// First position where the two words differ, if any
    #[must_use]
    pub fn first_difference(&self, other: &Self) -> Option<usize> {
        self.letters
            .iter()
            .zip(other.letters())
            .position(|(a, b)| a != b)
    }

    /// The word with each position in turn replaced by [`VARIATION_CHAR`]
    ///
    /// Two words share a pattern exactly when they differ only at that pattern's
    /// wildcard position.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(word.variation_patterns(), vec!["_AT", "C_T", "CA_"]);
    /// ```
    #[must_use]
    pub fn variation_patterns(&self) -> Vec<String> {
        (0..self.len())
            .map(|position| {
                self.letters
                    .iter()
                    .enumerate()
                    .map(|(i, &c)| if i == position { VARIATION_CHAR } else { c })
                    .collect()
            })
            .collect()
    }

    /// Ids of the words one letter away from this one
    #[inline]
    #[must_use]
    pub fn links(&self) -> &[WordId] {
        &self.links
    }

    /// Whether no other dictionary word is one letter away
    #[inline]
    #[must_use]
    pub fn is_island(&self) -> bool {
        self.links.is_empty()
    }

    /// Set the links once, at graph-build time
    pub(crate) fn set_links(&mut self, mut links: Vec<WordId>) {
        links.sort_unstable();
        self.links = links;
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
