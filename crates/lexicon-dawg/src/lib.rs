//! DAWG (directed acyclic word graph) engine.
//!
//! This crate provides loading, traversal and construction of binary DAWG
//! dictionaries: a flat array of 32-bit edge records preceded by a short
//! ASCII header.
//!
//! # Architecture
//!
//! - [`edge`] -- Bit-packed edge record and byte-order normalization
//! - [`format`] -- `DAWG:<start>:<bytes>:` header parsing and writing
//! - [`store`] -- Owned edge array with sibling scanning and path tracing
//! - [`walk`] -- Explicit-stack enumeration of every accepted word
//! - [`builder`] -- Suffix-sharing DAWG construction from word lists

pub mod builder;
pub mod edge;
pub mod format;
pub mod store;
pub mod walk;

pub use builder::DawgBuilder;
pub use edge::Edge;
pub use store::AutomatonStore;

/// Error type for DAWG parsing and loading.
#[derive(Debug, thiserror::Error)]
pub enum DawgError {
    #[error("invalid magic tag in DAWG header: expected \"DAWG\", got {found:?}")]
    InvalidMagic { found: [u8; 4] },
    #[error("DAWG header ended before the {field} field was complete")]
    TruncatedHeader { field: &'static str },
    #[error("expected ':' before the {field} field, got byte 0x{found:02X}")]
    MissingSeparator { field: &'static str, found: u8 },
    #[error("malformed {field} in DAWG header")]
    MalformedInteger { field: &'static str },
    #[error("negative {field} in DAWG header")]
    NegativeValue { field: &'static str },
    #[error("edge data of {num_bytes} bytes exceeds the limit of {max} edges")]
    TooManyEdges { num_bytes: u64, max: usize },
    #[error("I/O error while reading DAWG data: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for DAWG construction.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("cannot add an empty word to a DAWG")]
    EmptyWord,
    #[error("word {word:?} contains {ch:?}, which has no letter ordinal")]
    InvalidCharacter { word: String, ch: char },
    #[error("DAWG needs {count} edges, more than the limit of {max}")]
    TooManyEdges { count: usize, max: usize },
    #[error("I/O error while writing DAWG data: {0}")]
    Io(#[from] std::io::Error),
}

/// Maximum depth of a word walk.
///
/// Well-formed dictionaries are acyclic, so the walk depth is the length of
/// the longest word. A corrupt file may link a children run back to one of
/// its ancestors; the limit keeps enumeration from descending forever.
pub const MAX_WORD_LENGTH: usize = 1024;
