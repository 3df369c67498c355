//! Error types for loading word lists, defining puzzles and generating ladders.
//!
//! The three families map onto how callers react to them:
//!
//! - [`LoadError`]: configuration problems (missing or malformed word list).
//!   Fatal, surfaced immediately, never retried.
//! - [`PuzzleError`]: rejected puzzle input. The puzzle keeps its previous state.
//! - [`GeneratorError`]: the generator could not be set up, or ran out of
//!   attempts. A single dead end is not an error, see
//!   [`Generation::Retry`](crate::solver::Generation::Retry).
//!
//! # Examples
//!
//! ```
//! use word_ladder::errors::LoadError;
//! use word_ladder::graph::GraphRegistry;
//!
//! let registry = GraphRegistry::default();
//! match registry.for_length(1) {
//!     Err(LoadError::NoResource { word_length }) => assert_eq!(word_length, 1),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use crate::core::WordError;
use std::io;
use std::path::PathBuf;

/// Failure to produce a word graph for a word length
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no word list resource exists for {word_length}-letter words")]
    NoResource { word_length: usize },

    #[error("error loading {word_length}-letter word list from {}: {source}", path.display())]
    Io {
        word_length: usize,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "word '{word}' (length = {length}) cannot be loaded into {expected}-letter word list"
    )]
    BadEntryLength {
        word: String,
        length: usize,
        expected: usize,
    },

    #[error("word '{word}' cannot be loaded into {word_length}-letter word list: {source}")]
    InvalidEntry {
        word: String,
        word_length: usize,
        #[source]
        source: WordError,
    },
}

/// Rejected puzzle definition
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("word '{word}' not found in dictionary")]
    NotFound { word: String },

    #[error(
        "word '{word}' is an island word (varying any character does not create another valid word)"
    )]
    IslandWord { word: String },

    #[error("end word '{word}' (length {length}) must match start word length ({expected})")]
    LengthMismatch {
        word: String,
        length: usize,
        expected: usize,
    },

    #[error("start word has not been set yet")]
    StartWordNotSet,

    #[error("puzzle needs both a start word and an end word")]
    Incomplete,

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Failure to set up or complete ladder generation
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("ladder length must be at least 1, got {0}")]
    InvalidLadderLength(usize),

    #[error("{word_length}-letter dictionary has no linked words to build a ladder from")]
    NoLinkedWords { word_length: usize },

    #[error("couldn't generate a word ladder after {attempts} attempts")]
    RetriesExhausted { attempts: usize },

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl PuzzleError {
    /// Whether the error is about the input words rather than the word lists
    #[must_use]
    pub const fn is_rejected_input(&self) -> bool {
        !matches!(self, Self::Load(_))
    }
}
