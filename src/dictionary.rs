// Boggle Dictionary
// Word index used by the board search: exact and prefix lookups

use crate::trie::Trie;
use log::{debug, warn};
use rustc_hash::FxHashMap;

/// Lookup interface the board search needs from a word list
///
/// Both queries should cost time proportional to the query length; the
/// search calls them once per path step.
pub trait WordIndex {
    /// Exact membership
    fn contains(&self, word: &str) -> bool;

    /// Whether some word starts with `prefix` (the word itself included)
    fn has_prefix(&self, prefix: &str) -> bool;
}

impl WordIndex for Trie {
    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        Trie::has_prefix(self, prefix)
    }
}

impl<T: WordIndex + ?Sized> WordIndex for &T {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        (**self).has_prefix(prefix)
    }
}

/// Immutable dictionary backed by a trie, with word counts by length
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    trie: Trie,

    /// Word length → number of distinct words of that length
    counts_by_length: FxHashMap<usize, usize>,
}

impl Dictionary {
    /// Build a dictionary from a word list
    ///
    /// Duplicates collapse. Empty words and words with characters outside
    /// A-Z are skipped with a warning.
    ///
    /// # Example
    /// ```
    /// # use boggle_solver::dictionary::{Dictionary, WordIndex};
    /// let dict = Dictionary::new(["CAT", "CATS", "CAT"]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.has_prefix("CA"));
    /// assert!(!dict.contains("CA"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        let mut counts_by_length: FxHashMap<usize, usize> = FxHashMap::default();
        let mut skipped = 0usize;

        for word in words {
            let word = word.as_ref();
            if word.is_empty() || !word.bytes().all(|b| b.is_ascii_uppercase()) {
                warn!("Skipping dictionary word {:?}: not uppercase A-Z", word);
                skipped += 1;
                continue;
            }
            if trie.insert(word) {
                *counts_by_length.entry(word.len()).or_insert(0) += 1;
            }
        }

        debug!(
            "Indexed {} words ({} trie nodes, {} skipped)",
            trie.len(),
            trie.node_count(),
            skipped
        );

        Self {
            trie,
            counts_by_length,
        }
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Number of distinct words of exactly `length` letters
    pub fn words_with_length(&self, length: usize) -> usize {
        self.counts_by_length.get(&length).copied().unwrap_or(0)
    }

    /// Counts of words by length
    ///
    /// # Returns
    /// FxHashMap with length → count
    pub fn count_by_length(&self) -> &FxHashMap<usize, usize> {
        &self.counts_by_length
    }

    /// The underlying trie
    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl WordIndex for Dictionary {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    #[inline]
    fn has_prefix(&self, prefix: &str) -> bool {
        self.trie.has_prefix(prefix)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}
