//! Word lexicon: a static binary DAWG merged with a mutable word overlay.
//!
//! - [`overlay`] -- Runtime-added words, stored case-folded
//! - [`loader`] -- Binary and plain-text dictionary ingestion
//! - [`lexicon`] -- The [`Lexicon`] facade answering word and prefix queries
//!
//! ```
//! use lexicon::Lexicon;
//!
//! let mut lex = Lexicon::new();
//! lex.add("Apple");
//! assert!(lex.contains_word("APPLE"));
//! assert!(lex.contains_prefix("app"));
//! assert_eq!(lex.len(), 1);
//! ```

pub mod lexicon;
pub mod loader;
pub mod overlay;

use std::io;
use std::path::PathBuf;

pub use crate::lexicon::Lexicon;
pub use lexicon_dawg::{AutomatonStore, DawgError};

#[cfg(feature = "builder")]
pub use lexicon_dawg::{BuildError, DawgBuilder};

/// Error type for loading a lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The dictionary file could not be opened.
    #[error("couldn't open lexicon file {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Reading the dictionary file failed part-way.
    #[error("error reading lexicon file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The dictionary file is not a well-formed binary DAWG.
    #[error("improperly formed lexicon file {}: {source}", path.display())]
    Format { path: PathBuf, source: DawgError },

    /// Binary dictionary data from a reader is malformed.
    #[error("improperly formed lexicon data: {0}")]
    Dawg(#[from] DawgError),

    /// Reading dictionary data from a reader failed.
    #[error("error reading lexicon data: {0}")]
    Io(#[from] io::Error),
}

impl LexiconError {
    /// Attach the file path to an error produced while reading a stream.
    pub(crate) fn at_path(self, path: PathBuf) -> Self {
        match self {
            LexiconError::Dawg(DawgError::Io(source)) | LexiconError::Io(source) => {
                LexiconError::Read { path, source }
            }
            LexiconError::Dawg(source) => LexiconError::Format { path, source },
            other => other,
        }
    }
}
