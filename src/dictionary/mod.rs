//! Word validity dictionary
//!
//! The set of words a board may use. A dictionary is loaded once per run and
//! never mutated afterwards; the rejection cache is applied up front as a
//! snapshot. Corpus weights in the source file are curation data and are
//! dropped on load.

pub mod loader;

use rustc_hash::FxHashSet;

pub use loader::{DictionaryError, load_dictionary, load_rejections};

/// Read-only set of playable words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from a list of words
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["gate", "date", "gate"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("date"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

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

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over all words, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Drop every word in the rejection set
    #[must_use]
    pub fn without_rejected(mut self, rejected: &FxHashSet<String>) -> Self {
        if !rejected.is_empty() {
            self.words.retain(|word| !rejected.contains(word));
        }
        self
    }
}
