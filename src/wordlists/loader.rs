//! Word list loading utilities
//!
//! Reads `<N>-letter-words.txt` resources from the embedded set or from a
//! directory, and parses them into validated words.

use super::embedded::embedded_word_list;
use crate::core::Word;
use crate::errors::LoadError;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name suffix shared by every word list resource
pub const RESOURCE_NAME_SUFFIX: &str = "-letter-words.txt";

/// Resource name for a word length, e.g. `5-letter-words.txt`
#[must_use]
pub fn resource_name(word_length: usize) -> String {
    format!("{word_length}{RESOURCE_NAME_SUFFIX}")
}

/// Where word list resources come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordListSource {
    /// Lists compiled into the binary from `data/`
    #[default]
    Embedded,
    /// `<N>-letter-words.txt` files in a directory
    Directory(PathBuf),
}

impl WordListSource {
    /// Source reading from a directory on disk
    pub fn directory(path: impl AsRef<Path>) -> Self {
        Self::Directory(path.as_ref().to_path_buf())
    }

    /// Raw contents of the word list for a length
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NoResource` if there is no list for the length, or
    /// `LoadError::Io` if a list file exists but cannot be read.
    pub fn read(&self, word_length: usize) -> Result<Cow<'static, str>, LoadError> {
        match self {
            Self::Embedded => embedded_word_list(word_length)
                .map(Cow::Borrowed)
                .ok_or(LoadError::NoResource { word_length }),
            Self::Directory(dir) => {
                let path = dir.join(resource_name(word_length));
                match fs::read_to_string(&path) {
                    Ok(content) => Ok(Cow::Owned(content)),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        Err(LoadError::NoResource { word_length })
                    }
                    Err(source) => Err(LoadError::Io {
                        word_length,
                        path,
                        source,
                    }),
                }
            }
        }
    }

    /// Read and parse the word list for a length
    ///
    /// # Errors
    ///
    /// Any error from [`read`](Self::read) or [`parse_word_list`].
    pub fn load(&self, word_length: usize) -> Result<Vec<Word>, LoadError> {
        let content = self.read(word_length)?;
        parse_word_list(word_length, &content)
    }
}

/// Parse one word per line, ignoring blank lines
///
/// # Errors
///
/// Fails on the first non-blank line that is not exactly `word_length`
/// letters long, or that is not a valid word.
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list(3, "cat\n\ncot\r\nDOG\n").unwrap();
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[2].text(), "DOG");
///
/// assert!(parse_word_list(3, "cat\ncats\n").is_err());
/// ```
pub fn parse_word_list(word_length: usize, content: &str) -> Result<Vec<Word>, LoadError> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let length = line.chars().count();
            if length != word_length {
                return Err(LoadError::BadEntryLength {
                    word: line.to_string(),
                    length,
                    expected: word_length,
                });
            }
            Word::new(line).map_err(|source| LoadError::InvalidEntry {
                word: line.to_string(),
                word_length,
                source,
            })
        })
        .collect()
}
