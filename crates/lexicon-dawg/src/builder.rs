// DAWG construction: word trie, suffix sharing, binary serialization.

use std::io::Write;

use hashbrown::HashMap;
use lexicon_core::character::letter_ordinal;

use crate::BuildError;
use crate::edge::{EDGE_SIZE, Edge, MAX_EDGES, NO_CHILDREN};
use crate::format::{self, DawgHeader};
use crate::store::AutomatonStore;

const ROOT: usize = 0;

#[derive(Debug, Default)]
struct TrieNode {
    terminal: bool,
    /// `(letter, child node)`, sorted by letter.
    children: Vec<(u8, usize)>,
}

/// Builds binary DAWG dictionaries from word lists.
///
/// Words are collected into a trie in any order. [`build`](Self::build)
/// then encodes the trie bottom-up, giving every node a sibling run and
/// reusing an existing run whenever a node's encoded run is identical to one
/// already emitted, so common suffixes are stored once.
///
/// Edge 0 of the output is a padding record: a children index of 0 always
/// means "leaf", so no real run may start there.
///
/// ```
/// use lexicon_dawg::DawgBuilder;
///
/// let mut builder = DawgBuilder::new();
/// for word in ["baking", "making", "taking"] {
///     builder.insert(word).unwrap();
/// }
/// let store = builder.build().unwrap();
/// assert!(store.contains_word("making"));
/// assert!(!store.contains_word("aking"));
/// ```
#[derive(Debug)]
pub struct DawgBuilder {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for DawgBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DawgBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Number of distinct words inserted so far.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Add a word. Letters are matched case-insensitively.
    ///
    /// Returns `Ok(false)` if the word was already present. Only ASCII
    /// letters can be encoded; anything else is rejected before the trie is
    /// touched.
    pub fn insert(&mut self, word: &str) -> Result<bool, BuildError> {
        if word.is_empty() {
            return Err(BuildError::EmptyWord);
        }
        let ordinals = word
            .chars()
            .map(|ch| {
                letter_ordinal(ch).ok_or_else(|| BuildError::InvalidCharacter {
                    word: word.to_string(),
                    ch,
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let mut node = ROOT;
        for letter in ordinals {
            node = match self.nodes[node]
                .children
                .binary_search_by_key(&letter, |&(l, _)| l)
            {
                Ok(pos) => self.nodes[node].children[pos].1,
                Err(pos) => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(pos, (letter, child));
                    child
                }
            };
        }

        let added = !self.nodes[node].terminal;
        self.nodes[node].terminal = true;
        if added {
            self.word_count += 1;
        }
        Ok(added)
    }

    /// Insert every word from an iterator.
    pub fn extend_words<I, S>(&mut self, words: I) -> Result<(), BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref())?;
        }
        Ok(())
    }

    /// Encode the collected words as an in-memory automaton.
    pub fn build(&self) -> Result<AutomatonStore, BuildError> {
        let (edges, start) = self.compile()?;
        Ok(AutomatonStore::new(edges, start))
    }

    /// Encode the collected words as a complete binary dictionary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BuildError> {
        let mut out = Vec::new();
        self.write_to(&mut out)?;
        Ok(out)
    }

    /// Write the binary dictionary (header and big-endian edges) to `writer`.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<(), BuildError> {
        let (edges, start) = self.compile()?;
        let header = DawgHeader {
            start_index: start as u64,
            num_bytes: (edges.len() * EDGE_SIZE) as u64,
        };
        format::write_header(writer, &header)?;

        let mut body = Vec::with_capacity(edges.len() * EDGE_SIZE);
        for edge in &edges {
            body.extend_from_slice(&edge.to_be_bytes());
        }
        writer.write_all(&body)?;

        tracing::debug!(
            words = self.word_count,
            edges = edges.len(),
            start,
            "wrote DAWG"
        );
        Ok(())
    }

    /// Lay out sibling runs bottom-up and return the edges and root index.
    fn compile(&self) -> Result<(Vec<Edge>, usize), BuildError> {
        let mut edges = vec![Edge::new(0, false, true, NO_CHILDREN)];
        let mut registry: HashMap<Vec<Edge>, u32> = HashMap::new();
        let mut run_of = vec![NO_CHILDREN; self.nodes.len()];

        // Post-order: a node is encoded after all of its children.
        let mut stack = vec![(ROOT, false)];
        while let Some((node, expanded)) = stack.pop() {
            if !expanded {
                stack.push((node, true));
                stack.extend(self.nodes[node].children.iter().map(|&(_, c)| (c, false)));
                continue;
            }

            let children = &self.nodes[node].children;
            if children.is_empty() {
                continue;
            }
            let run: Vec<Edge> = children
                .iter()
                .enumerate()
                .map(|(i, &(letter, child))| {
                    Edge::new(
                        letter,
                        self.nodes[child].terminal,
                        i + 1 == children.len(),
                        run_of[child],
                    )
                })
                .collect();

            run_of[node] = match registry.get(&run) {
                Some(&index) => index,
                None => {
                    let index = edges.len();
                    if index + run.len() > MAX_EDGES {
                        return Err(BuildError::TooManyEdges {
                            count: index + run.len(),
                            max: MAX_EDGES,
                        });
                    }
                    edges.extend_from_slice(&run);
                    registry.insert(run, index as u32);
                    index as u32
                }
            };
        }

        Ok((edges, run_of[ROOT] as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_small_list() {
        let mut b = DawgBuilder::new();
        b.extend_words(["cat", "car", "cap"]).unwrap();
        let store = b.build().unwrap();
        assert_eq!(store.word_count(), 3);
        assert!(store.contains_word("cat"));
        assert!(!store.contains_word("ca"));
        assert!(store.contains_prefix("ca"));
        let words: Vec<String> = store.words().collect();
        assert_eq!(words, ["cap", "car", "cat"]);
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        let mut sorted = DawgBuilder::new();
        sorted.extend_words(["ape", "apple", "apply", "zoo"]).unwrap();
        let mut shuffled = DawgBuilder::new();
        shuffled.extend_words(["zoo", "apply", "ape", "apple"]).unwrap();

        let store = shuffled.build().unwrap();
        assert_eq!(store, sorted.build().unwrap());
        assert_eq!(
            store.words().collect::<Vec<_>>(),
            ["ape", "apple", "apply", "zoo"]
        );
    }

    #[test]
    fn padding_edge_first() {
        let mut b = DawgBuilder::new();
        b.insert("a").unwrap();
        let store = b.build().unwrap();
        assert_eq!(store.edges()[0], Edge::new(0, false, true, 0));
        assert_eq!(store.start(), 1);
    }

    #[test]
    fn duplicates_and_case_collapse() {
        let mut b = DawgBuilder::new();
        assert!(b.insert("Hello").unwrap());
        assert!(!b.insert("hello").unwrap());
        assert!(!b.insert("HELLO").unwrap());
        assert_eq!(b.len(), 1);
        assert_eq!(b.build().unwrap().word_count(), 1);
    }

    #[test]
    fn shared_suffixes_stored_once() {
        let mut b = DawgBuilder::new();
        b.extend_words(["baking", "making", "taking", "waking"]).unwrap();
        let store = b.build().unwrap();
        // padding + root run (4) + one shared chain a-k-i-n-g (5)
        assert_eq!(store.len(), 10);
        assert_eq!(store.word_count(), 4);
        assert!(store.contains_word("waking"));
    }

    #[test]
    fn reject_empty_word() {
        let mut b = DawgBuilder::new();
        assert!(matches!(b.insert(""), Err(BuildError::EmptyWord)));
    }

    #[test]
    fn reject_non_letters() {
        let mut b = DawgBuilder::new();
        let err = b.insert("don't").unwrap_err();
        assert!(matches!(err, BuildError::InvalidCharacter { ch: '\'', .. }));
        assert!(b.is_empty());
    }

    #[test]
    fn empty_builder_yields_empty_automaton() {
        let b = DawgBuilder::new();
        let bytes = b.to_bytes().unwrap();
        assert_eq!(&bytes[..9], b"DAWG:0:4:");
        let store = AutomatonStore::from_bytes(&bytes).unwrap();
        assert_eq!(store.word_count(), 0);
        assert!(!store.contains_prefix("a"));
    }

    #[test]
    fn bytes_load_back() {
        let words = ["apple", "apply", "ape", "banana", "band", "bandana", "can"];
        let mut b = DawgBuilder::new();
        b.extend_words(words).unwrap();
        let bytes = b.to_bytes().unwrap();
        let store = AutomatonStore::from_bytes(&bytes).unwrap();
        assert_eq!(store, b.build().unwrap());
        for w in words {
            assert!(store.contains_word(w), "{w}");
        }
        assert!(!store.contains_word("ban"));
        assert!(store.contains_prefix("ban"));
        assert_eq!(store.word_count(), words.len());
    }
}
