//! Immutable word lists loaded from newline-delimited sources.

use std::collections::HashSet;
use std::path::Path;

use crate::error::LoadError;

/// Lines beginning with this character are comments. The published
/// opinion-lexicon files open with a block of them.
const COMMENT_PREFIX: char = ';';

/// An immutable, non-empty set of lowercase sentiment words.
///
/// Only [`WordSet::parse`] and [`WordSet::from_path`] build one, so every
/// set holds at least one word.
#[derive(Debug, Clone)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Parses one word per line, skipping blank and `;` comment lines.
    ///
    /// Each entry is trimmed and lower-cased. `label` only appears in errors.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] when no words remain after filtering.
    pub fn parse(label: &str, source: &str) -> Result<Self, LoadError> {
        let words: HashSet<String> = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
            .map(str::to_lowercase)
            .collect();

        if words.is_empty() {
            return Err(LoadError::Empty {
                label: label.to_string(),
            });
        }

        Ok(Self { words })
    }

    /// Reads and parses a word-list file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read and
    /// [`LoadError::Empty`] if it holds no words.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::parse(&path.display().to_string(), &source)?;
        tracing::debug!(path = %path.display(), words = set.len(), "loaded word list");
        Ok(set)
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
