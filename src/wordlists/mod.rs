//! Word lists for word ladders
//!
//! One `<N>-letter-words.txt` list per word length, embedded into the binary
//! at build time or read from a directory.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED_LENGTHS, embedded_word_list};
pub use loader::{WordListSource, parse_word_list};
