// Edge record: one DAWG transition packed into 32 bits.

use bytemuck::{Pod, Zeroable};

/// Size of one edge record on disk and in memory.
pub const EDGE_SIZE: usize = 4;

/// Number of edges addressable by the 24-bit children index.
pub const MAX_EDGES: usize = 1 << 24;

const LETTER_SHIFT: u32 = 27;
const LETTER_MASK: u32 = 0x1F;
const LAST_SIBLING_BIT: u32 = 1 << 26;
const ACCEPT_BIT: u32 = 1 << 25;
const CHILDREN_MASK: u32 = 0x00FF_FFFF;

/// Children index meaning "this edge leads to a leaf".
pub const NO_CHILDREN: u32 = 0;

/// One DAWG transition (4 bytes).
///
/// The record is kept as an opaque host-order `u32` and decoded with explicit
/// shifts and masks:
/// - bits 27-31: `letter` (1 = 'a' .. 26 = 'z')
/// - bit 26: `is_last_sibling`
/// - bit 25: `accept`
/// - bit 24: unused
/// - bits 0-23: `children_index` (0 = no children)
///
/// Once a record is read as a big-endian word, the children index is in the
/// least significant bits, so the first byte on disk carries the letter and
/// the two flags.
///
/// Malformed records decode to well-typed but meaningless values; nothing
/// here validates them.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Edge(u32);

impl Edge {
    /// Pack the four logical fields into a record.
    ///
    /// Each field is masked to its bit width, so out-of-range values are
    /// truncated rather than spilling into neighbouring fields.
    pub fn new(letter: u8, accept: bool, is_last_sibling: bool, children_index: u32) -> Self {
        let mut raw = (letter as u32 & LETTER_MASK) << LETTER_SHIFT;
        if is_last_sibling {
            raw |= LAST_SIBLING_BIT;
        }
        if accept {
            raw |= ACCEPT_BIT;
        }
        raw |= children_index & CHILDREN_MASK;
        Self(raw)
    }

    /// Wrap a host-order raw value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The host-order raw value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Decode a record from its on-disk (big-endian) bytes.
    #[inline]
    pub fn from_be_bytes(bytes: [u8; EDGE_SIZE]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Encode the record in on-disk (big-endian) byte order.
    #[inline]
    pub fn to_be_bytes(self) -> [u8; EDGE_SIZE] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub fn letter(self) -> u8 {
        ((self.0 >> LETTER_SHIFT) & LETTER_MASK) as u8
    }

    #[inline]
    pub fn accept(self) -> bool {
        self.0 & ACCEPT_BIT != 0
    }

    #[inline]
    pub fn is_last_sibling(self) -> bool {
        self.0 & LAST_SIBLING_BIT != 0
    }

    #[inline]
    pub fn children_index(self) -> u32 {
        self.0 & CHILDREN_MASK
    }

    /// Returns `true` unless the children index is the leaf sentinel.
    #[inline]
    pub fn has_children(self) -> bool {
        self.children_index() != NO_CHILDREN
    }
}

impl std::fmt::Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Edge")
            .field("letter", &self.letter())
            .field("accept", &self.accept())
            .field("is_last_sibling", &self.is_last_sibling())
            .field("children_index", &self.children_index())
            .finish()
    }
}

/// Convert a buffer of edges read verbatim from disk into host byte order.
///
/// Records are stored big-endian; on little-endian hosts every word is
/// byte-swapped, on big-endian hosts this is a no-op.
pub fn normalize_byte_order(edges: &mut [Edge]) {
    if cfg!(target_endian = "big") {
        return;
    }
    for edge in edges {
        edge.0 = u32::from_be(edge.0);
    }
}

const _: () = assert!(size_of::<Edge>() == EDGE_SIZE);
