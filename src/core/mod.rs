//! Core domain types for word ladders
//!
//! Words are pure values; their links are filled in once by the graph builder
//! in [`crate::graph`] and never change afterwards.

mod word;

pub use word::{VARIATION_CHAR, Word, WordError, WordId, normalize};
