// Lexicon facade: one query API over the static automaton and the overlay.

use std::collections::btree_set;
use std::io::Read;
use std::iter::Peekable;
use std::path::Path;

use lexicon_core::case::{fold_case, fold_case_cow};
use lexicon_dawg::AutomatonStore;
use lexicon_dawg::walk;

use crate::LexiconError;
use crate::loader::{self, DictionaryKind};
use crate::overlay::OverlayStore;

/// A word list backed by a binary DAWG plus a set of runtime-added words.
///
/// The DAWG holds the bulk of the dictionary and is read-only once loaded.
/// Words added with [`add`](Self::add) go to an overlay, stored lowercase.
/// A word the DAWG already accepts is never copied into the overlay, so
/// [`len`](Self::len) is simply the DAWG's word count plus the overlay size.
///
/// All queries fold their input to lowercase first. Queries never fail and
/// accept any string, including the empty one.
///
/// `Clone` produces a fully independent deep copy of both stores.
#[derive(Clone, Default)]
pub struct Lexicon {
    dawg: AutomatonStore,
    /// Words accepted by `dawg`, counted once at load.
    dawg_word_count: usize,
    overlay: OverlayStore,
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("edge_count", &self.dawg.len())
            .field("dawg_words", &self.dawg_word_count)
            .field("overlay_words", &self.overlay.len())
            .finish()
    }
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a lexicon from a binary DAWG or plain-text word list.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let mut lexicon = Self::new();
        lexicon.add_words_from_file(path)?;
        Ok(lexicon)
    }

    /// Load a lexicon from a reader holding a binary DAWG or word list.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        let mut lexicon = Self::new();
        lexicon.add_words_from_reader(reader)?;
        Ok(lexicon)
    }

    /// Wrap an already loaded automaton, counting its words.
    pub fn from_automaton(store: AutomatonStore) -> Self {
        let dawg_word_count = store.word_count();
        Self {
            dawg: store,
            dawg_word_count,
            overlay: OverlayStore::new(),
        }
    }

    /// Load a dictionary file into this lexicon.
    ///
    /// A binary file replaces the current automaton; overlay words it already
    /// contains are dropped from the overlay. A text file adds each line.
    pub fn add_words_from_file<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<DictionaryKind, LexiconError> {
        loader::load_file_into(self, path.as_ref())
    }

    /// Load dictionary data from a reader into this lexicon.
    ///
    /// Same dispatch as [`add_words_from_file`](Self::add_words_from_file).
    pub fn add_words_from_reader<R: Read>(
        &mut self,
        reader: R,
    ) -> Result<DictionaryKind, LexiconError> {
        loader::load_into(self, reader)
    }

    /// Returns `true` if `word` is in the lexicon.
    pub fn contains_word(&self, word: &str) -> bool {
        let word = fold_case_cow(word);
        self.dawg.contains_word(&word) || self.overlay.contains(&word)
    }

    /// Returns `true` if some word in the lexicon starts with `prefix`.
    ///
    /// The empty prefix is always contained, even in an empty lexicon.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return true;
        }
        let prefix = fold_case_cow(prefix);
        self.dawg.contains_prefix(&prefix) || self.overlay.contains_prefix(&prefix)
    }

    /// Add a word to the overlay.
    ///
    /// Does nothing if the lexicon already contains the word. Returns `true`
    /// if the word was added.
    pub fn add(&mut self, word: &str) -> bool {
        if self.contains_word(word) {
            return false;
        }
        self.overlay.insert(fold_case(word))
    }

    /// Total number of words: the DAWG's words plus the overlay's.
    pub fn len(&self) -> usize {
        self.dawg_word_count + self.overlay.len()
    }

    /// Same as [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Release the automaton and empty the overlay.
    pub fn clear(&mut self) {
        self.dawg = AutomatonStore::default();
        self.dawg_word_count = 0;
        self.overlay.clear();
    }

    /// Number of words accepted by the loaded DAWG.
    pub fn dawg_word_count(&self) -> usize {
        self.dawg_word_count
    }

    /// Number of words added at runtime.
    pub fn overlay_word_count(&self) -> usize {
        self.overlay.len()
    }

    /// The loaded automaton (empty if none was loaded).
    pub fn automaton(&self) -> &AutomatonStore {
        &self.dawg
    }

    /// Iterate over every word in sorted order.
    ///
    /// DAWG words come out in storage order, which is alphabetical for
    /// dictionaries whose sibling runs are sorted.
    pub fn words(&self) -> Words<'_> {
        Words {
            dawg: self.dawg.words().peekable(),
            overlay: self.overlay.entries().peekable(),
        }
    }

    /// Call `f` for every word: all DAWG words first, then overlay words.
    ///
    /// Cheaper than [`words`](Self::words) for large dictionaries because
    /// DAWG words are not allocated individually.
    pub fn for_each_word<F: FnMut(&str)>(&self, mut f: F) {
        self.dawg.for_each_word(&mut f);
        for word in self.overlay.iter() {
            f(word);
        }
    }

    /// Replace the automaton with a freshly loaded one.
    ///
    /// Overlay words the new automaton accepts are dropped so that no word is
    /// counted twice.
    pub(crate) fn install_automaton(&mut self, store: AutomatonStore, word_count: usize) {
        self.dawg = store;
        self.dawg_word_count = word_count;

        let dawg = &self.dawg;
        let before = self.overlay.len();
        self.overlay.retain(|word| !dawg.contains_word(word));
        let dropped = before - self.overlay.len();
        if dropped > 0 {
            tracing::debug!(dropped, "overlay words now covered by the DAWG");
        }
    }
}

#[cfg(feature = "builder")]
impl Lexicon {
    /// Compile every word, DAWG and overlay alike, into a new automaton.
    ///
    /// Fails if an overlay word contains a character that has no letter
    /// ordinal.
    pub fn to_automaton(&self) -> Result<AutomatonStore, lexicon_dawg::BuildError> {
        self.builder()?.build()
    }

    /// Write every word as a binary DAWG dictionary.
    pub fn write_binary<W: std::io::Write + ?Sized>(
        &self,
        writer: &mut W,
    ) -> Result<(), lexicon_dawg::BuildError> {
        self.builder()?.write_to(writer)
    }

    fn builder(&self) -> Result<lexicon_dawg::DawgBuilder, lexicon_dawg::BuildError> {
        let mut builder = lexicon_dawg::DawgBuilder::new();
        let mut result = Ok(());
        self.for_each_word(|word| {
            if result.is_ok() {
                result = builder.insert(word).map(|_| ());
            }
        });
        result.map(|()| builder)
    }
}

impl<S: AsRef<str>> Extend<S> for Lexicon {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut lexicon = Self::new();
        lexicon.extend(iter);
        lexicon
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Words<'a> {
        self.words()
    }
}

/// Sorted iterator over all words of a [`Lexicon`].
///
/// Merges the DAWG walk with the overlay's ordered set.
pub struct Words<'a> {
    dawg: Peekable<walk::Words<'a>>,
    overlay: Peekable<btree_set::Iter<'a, String>>,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let take_dawg = match (self.dawg.peek(), self.overlay.peek()) {
            (Some(d), Some(o)) => d.as_str() <= o.as_str(),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return None,
        };
        if take_dawg {
            self.dawg.next()
        } else {
            self.overlay.next().cloned()
        }
    }
}
