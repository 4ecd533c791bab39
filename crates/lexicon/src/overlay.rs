// Overlay store: words added at runtime.

use std::collections::{BTreeSet, btree_set};
use std::ops::Bound;

/// Mutable set of case-folded words layered over the static automaton.
///
/// The set is ordered so that a prefix scan is a range lookup: the first
/// word not less than the prefix is the only candidate that needs checking.
/// Callers are responsible for folding words before they get here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayStore {
    words: BTreeSet<String>,
}

impl OverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a folded word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: String) -> bool {
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns `true` if some stored word starts with `prefix`.
    ///
    /// Matching is plain string prefix matching; characters with no letter
    /// ordinal (digits, apostrophes, non-ASCII letters) are compared like any
    /// other.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .is_some_and(|word| word.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Keep only the words for which `keep` returns `true`.
    pub fn retain<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.words.retain(|word| keep(word));
    }

    /// Iterate in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    pub(crate) fn entries(&self) -> btree_set::Iter<'_, String> {
        self.words.iter()
    }
}
