//! Word-list scorer.

use std::path::Path;

use crate::error::LoadError;
use crate::types::{Score, Sentiment, Tally};
use crate::word_set::WordSet;

/// Split text into lowercase tokens on whitespace.
///
/// Leading and trailing non-alphanumeric characters are stripped from each
/// token, so `"Great!!"` becomes `"great"` while `"can't"` is kept intact.
/// Tokens made only of punctuation are dropped.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(|raw| {
        let token = raw.trim_matches(|c: char| !c.is_alphanumeric());
        (!token.is_empty()).then(|| token.to_lowercase())
    })
}

/// Scores texts against a positive and a negative [`WordSet`].
///
/// Both sets are fixed at construction; the analyzer holds no other state
/// and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    positives: WordSet,
    negatives: WordSet,
}

impl Analyzer {
    #[must_use]
    pub fn new(positives: WordSet, negatives: WordSet) -> Self {
        Self {
            positives,
            negatives,
        }
    }

    /// Loads both word lists from disk.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if either file is missing, unreadable, or empty.
    pub fn from_paths(
        positive_path: impl AsRef<Path>,
        negative_path: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let positives = WordSet::from_path(positive_path)?;
        let negatives = WordSet::from_path(negative_path)?;
        tracing::info!(
            positive_words = positives.len(),
            negative_words = negatives.len(),
            "sentiment word lists loaded"
        );
        Ok(Self::new(positives, negatives))
    }

    /// Builds an analyzer from in-memory newline-separated word lists.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] if either source holds no words.
    pub fn from_sources(positive: &str, negative: &str) -> Result<Self, LoadError> {
        Ok(Self::new(
            WordSet::parse("positive", positive)?,
            WordSet::parse("negative", negative)?,
        ))
    }

    /// Positive-word tokens minus negative-word tokens.
    ///
    /// A token listed in both sets counts once on each side. Returns `0`
    /// for empty text.
    #[must_use]
    pub fn score(&self, text: &str) -> Score {
        tokenize(text)
            .map(|token| {
                i64::from(self.positives.contains(&token))
                    - i64::from(self.negatives.contains(&token))
            })
            .sum()
    }

    #[must_use]
    pub fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_score(self.score(text))
    }

    /// Scores every text and counts positive, negative and neutral results.
    #[must_use]
    pub fn tally<I, S>(&self, texts: I) -> Tally
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|text| self.score(text.as_ref()))
            .collect()
    }

    #[must_use]
    pub fn positives(&self) -> &WordSet {
        &self.positives
    }

    #[must_use]
    pub fn negatives(&self) -> &WordSet {
        &self.negatives
    }
}
