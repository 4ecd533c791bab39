// Automaton store: owned edge array with sibling scanning and path tracing.

use std::io::{self, Read};

use lexicon_core::character::letter_ordinal;

use crate::DawgError;
use crate::edge::{EDGE_SIZE, Edge, MAX_EDGES, normalize_byte_order};
use crate::format::{self, DawgHeader};
use crate::walk::Words;

/// A loaded DAWG.
///
/// Edges live in one contiguous buffer and refer to each other by index: an
/// edge's `children_index` is the position of the first edge in the sibling
/// run of the node it leads to. `start` is the position of the root run.
///
/// The store is immutable once built. Cloning duplicates the buffer, and
/// because `start` is an index the clone's root sits at the same relative
/// offset.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AutomatonStore {
    edges: Vec<Edge>,
    start: usize,
}

impl std::fmt::Debug for AutomatonStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutomatonStore")
            .field("edge_count", &self.edges.len())
            .field("start", &self.start)
            .finish()
    }
}

impl AutomatonStore {
    /// Wrap an edge buffer that is already in host byte order.
    pub fn new(edges: Vec<Edge>, start: usize) -> Self {
        Self { edges, start }
    }

    /// Load a store from a complete binary dictionary held in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DawgError> {
        Self::read_from(&mut io::Cursor::new(data))
    }

    /// Read the header and edge data of a binary dictionary.
    ///
    /// `reader` should be buffered; the header is consumed byte by byte.
    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self, DawgError> {
        let header = format::read_header(reader)?;
        Self::read_edges(reader, &header)
    }

    /// Read the edge data described by an already parsed header.
    ///
    /// A clean end of input before `num_bytes` have arrived is tolerated: the
    /// missing records stay zeroed, which decodes as edges that match nothing.
    /// Any other read failure is an error. A trailing partial record (when
    /// `num_bytes` is not a multiple of the record size) is consumed and
    /// discarded.
    pub fn read_edges<R: Read + ?Sized>(
        reader: &mut R,
        header: &DawgHeader,
    ) -> Result<Self, DawgError> {
        let edge_count = usize::try_from(header.num_bytes / EDGE_SIZE as u64)
            .ok()
            .filter(|&count| count <= MAX_EDGES)
            .ok_or(DawgError::TooManyEdges {
                num_bytes: header.num_bytes,
                max: MAX_EDGES,
            })?;

        let mut edges = vec![Edge::default(); edge_count];
        let wanted = edge_count * EDGE_SIZE;
        let got = read_until_eof(reader, bytemuck::cast_slice_mut::<Edge, u8>(&mut edges))?;

        let remainder = (header.num_bytes % EDGE_SIZE as u64) as usize;
        if got == wanted && remainder > 0 {
            let mut tail = [0u8; EDGE_SIZE];
            read_until_eof(reader, &mut tail[..remainder])?;
            tracing::debug!(remainder, "discarded partial trailing edge record");
        }
        if got < wanted {
            tracing::warn!(
                expected_bytes = wanted,
                read_bytes = got,
                "edge data ended early; missing records left empty"
            );
        }

        normalize_byte_order(&mut edges);

        // An out-of-range start cannot be represented as an index into the
        // buffer; it behaves as an empty automaton.
        let start = usize::try_from(header.start_index).unwrap_or(usize::MAX);
        Ok(Self { edges, start })
    }

    /// All edges in host byte order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Index of the root sibling run.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of edges in the buffer.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Index of the root sibling run, or `None` if there is nothing to
    /// traverse.
    #[inline]
    pub fn root(&self) -> Option<usize> {
        (self.start < self.edges.len()).then_some(self.start)
    }

    /// Scan the sibling run beginning at `siblings_start` for an edge
    /// labelled `ch`.
    ///
    /// The scan is linear. It stops at the first matching edge, or returns
    /// `None` after examining the edge flagged as last sibling. A run that
    /// runs off the end of the buffer also ends the scan.
    pub fn find_edge_for_char(&self, siblings_start: usize, ch: char) -> Option<Edge> {
        let ordinal = letter_ordinal(ch)?;
        let mut index = siblings_start;
        loop {
            let edge = *self.edges.get(index)?;
            if edge.letter() == ordinal {
                return Some(edge);
            }
            if edge.is_last_sibling() {
                return None;
            }
            index += 1;
        }
    }

    /// Follow `word` from the root one character at a time.
    ///
    /// Returns the edge consumed by the last character if every character has
    /// a transition. The returned edge says nothing about acceptance on its
    /// own; check [`Edge::accept`] for whole-word membership.
    pub fn trace_to_last_edge(&self, word: &str) -> Option<Edge> {
        let mut chars = word.chars();
        let first = chars.next()?;
        let mut edge = self.find_edge_for_char(self.root()?, first)?;
        for ch in chars {
            if !edge.has_children() {
                return None;
            }
            edge = self.find_edge_for_char(edge.children_index() as usize, ch)?;
        }
        Some(edge)
    }

    /// Returns `true` if `word` spells a path ending on an accepting edge.
    pub fn contains_word(&self, word: &str) -> bool {
        self.trace_to_last_edge(word).is_some_and(Edge::accept)
    }

    /// Returns `true` if `prefix` spells a path, accepting or not.
    ///
    /// The empty prefix has no path; callers decide what it means.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.trace_to_last_edge(prefix).is_some()
    }

    /// Iterate over every accepted word in sibling order.
    pub fn words(&self) -> Words<'_> {
        Words::new(self)
    }

    /// Call `f` once for every accepted word.
    ///
    /// Unlike [`words`](Self::words) this reuses a single path buffer, so no
    /// string is allocated per word.
    pub fn for_each_word<F: FnMut(&str)>(&self, mut f: F) {
        let mut walk = Words::new(self);
        while let Some(word) = walk.advance() {
            f(word);
        }
    }

    /// Count every accepted word with one full walk.
    pub fn word_count(&self) -> usize {
        let mut count = 0usize;
        self.for_each_word(|_| count += 1);
        count
    }
}

/// Fill `buf` from `reader`, stopping early only at end of input.
///
/// Returns the number of bytes read.
fn read_until_eof<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-encoded DAWG for {cap, car, cat}:
    ///
    /// ```text
    /// 0: 'c' last           -> 1
    /// 1: 'a' last           -> 2
    /// 2: 'p'      accept    leaf
    /// 3: 'r'      accept    leaf
    /// 4: 't' last accept    leaf
    /// ```
    fn cat_car_cap() -> Vec<u8> {
        let mut data = b"DAWG:0:20:".to_vec();
        data.extend_from_slice(&[
            0x1C, 0x00, 0x00, 0x01, //
            0x0C, 0x00, 0x00, 0x02, //
            0x82, 0x00, 0x00, 0x00, //
            0x92, 0x00, 0x00, 0x00, //
            0xA6, 0x00, 0x00, 0x00, //
        ]);
        data
    }

    #[test]
    fn load_hand_built() {
        let store = AutomatonStore::from_bytes(&cat_car_cap()).unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.start(), 0);
        assert_eq!(store.edges()[4], Edge::new(20, true, true, 0));
    }

    #[test]
    fn find_edge_in_run() {
        let store = AutomatonStore::from_bytes(&cat_car_cap()).unwrap();
        assert_eq!(store.find_edge_for_char(2, 'r').map(Edge::letter), Some(18));
        assert_eq!(store.find_edge_for_char(2, 't').map(Edge::letter), Some(20));
        assert!(store.find_edge_for_char(2, 'b').is_none());
        assert!(store.find_edge_for_char(2, '1').is_none());
    }

    #[test]
    fn find_edge_stops_at_last_sibling() {
        let store = AutomatonStore::from_bytes(&cat_car_cap()).unwrap();
        // The root run is just 'c'; 'a' lives in the next run and must not be
        // reached from the root.
        assert!(store.find_edge_for_char(0, 'a').is_none());
    }

    #[test]
    fn trace_reports_paths() {
        let store = AutomatonStore::from_bytes(&cat_car_cap()).unwrap();
        let edge = store.trace_to_last_edge("ca").unwrap();
        assert!(!edge.accept());
        let edge = store.trace_to_last_edge("cat").unwrap();
        assert!(edge.accept());
        assert!(store.trace_to_last_edge("cats").is_none());
        assert!(store.trace_to_last_edge("dog").is_none());
        assert!(store.trace_to_last_edge("").is_none());
    }

    #[test]
    fn trace_is_case_insensitive() {
        let store = AutomatonStore::from_bytes(&cat_car_cap()).unwrap();
        assert!(store.contains_word("CAT"));
        assert!(store.contains_word("cAr"));
    }

    #[test]
    fn word_and_prefix_membership() {
        let store = AutomatonStore::from_bytes(&cat_car_cap()).unwrap();
        assert!(store.contains_word("cap"));
        assert!(!store.contains_word("ca"));
        assert!(store.contains_prefix("ca"));
        assert!(store.contains_prefix("c"));
        assert!(!store.contains_prefix("d"));
    }

    #[test]
    fn count_and_enumerate() {
        let store = AutomatonStore::from_bytes(&cat_car_cap()).unwrap();
        assert_eq!(store.word_count(), 3);
        let words: Vec<String> = store.words().collect();
        assert_eq!(words, ["cap", "car", "cat"]);
    }

    #[test]
    fn empty_store_matches_nothing() {
        let store = AutomatonStore::from_bytes(b"DAWG:0:0:").unwrap();
        assert!(store.is_empty());
        assert!(store.root().is_none());
        assert!(!store.contains_prefix("a"));
        assert_eq!(store.word_count(), 0);

        let default = AutomatonStore::default();
        assert!(!default.contains_word("a"));
    }

    #[test]
    fn start_out_of_range_is_empty() {
        let mut data = b"DAWG:9:4:".to_vec();
        data.extend_from_slice(&Edge::new(1, true, true, 0).to_be_bytes());
        let store = AutomatonStore::from_bytes(&data).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.root().is_none());
        assert!(!store.contains_word("a"));
        assert_eq!(store.word_count(), 0);
    }

    #[test]
    fn run_without_last_marker_stays_in_bounds() {
        let edges = vec![Edge::new(1, true, false, 0), Edge::new(2, true, false, 0)];
        let store = AutomatonStore::new(edges, 0);
        assert!(store.contains_word("b"));
        assert!(!store.contains_word("c"));
        assert_eq!(store.word_count(), 2);
    }

    #[test]
    fn children_index_out_of_range() {
        let edges = vec![Edge::new(1, false, true, 500)];
        let store = AutomatonStore::new(edges, 0);
        assert!(store.contains_prefix("a"));
        assert!(!store.contains_prefix("ab"));
        assert_eq!(store.word_count(), 0);
    }

    #[test]
    fn truncated_edge_data_is_tolerated() {
        let mut data = cat_car_cap();
        // Drops all of 't' and the zero low bytes of 'r'
        data.truncate(data.len() - 6);
        let store = AutomatonStore::from_bytes(&data).unwrap();
        assert_eq!(store.len(), 5);
        assert!(store.contains_word("cap"));
        assert!(store.contains_word("car"));
        assert!(!store.contains_word("cat"));
        assert_eq!(store.word_count(), 2);
    }

    #[test]
    fn partial_trailing_record_discarded() {
        let mut data = b"DAWG:0:6:".to_vec();
        data.extend_from_slice(&Edge::new(1, true, true, 0).to_be_bytes());
        data.extend_from_slice(&[0xAB, 0xCD]);
        let store = AutomatonStore::from_bytes(&data).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.contains_word("a"));
    }

    #[test]
    fn oversized_byte_count_rejected() {
        let header = DawgHeader {
            start_index: 0,
            num_bytes: (MAX_EDGES as u64 + 1) * EDGE_SIZE as u64,
        };
        let err = AutomatonStore::read_edges(&mut io::empty(), &header).unwrap_err();
        assert!(matches!(err, DawgError::TooManyEdges { .. }));
    }

    #[test]
    fn read_error_is_fatal() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }
        let header = DawgHeader { start_index: 0, num_bytes: 8 };
        let err = AutomatonStore::read_edges(&mut Failing, &header).unwrap_err();
        assert!(matches!(err, DawgError::Io(_)));
    }

    #[test]
    fn clone_is_independent_buffer() {
        let store = AutomatonStore::from_bytes(&cat_car_cap()).unwrap();
        let copy = store.clone();
        assert_eq!(copy, store);
        assert_ne!(copy.edges().as_ptr(), store.edges().as_ptr());
        assert_eq!(copy.start(), store.start());
        assert!(copy.contains_word("car"));
    }
}
