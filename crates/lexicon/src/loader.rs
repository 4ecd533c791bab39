// Dictionary loading: binary DAWG files and plain-text word lists.
//
// The first four bytes decide the format. "DAWG" selects the binary loader;
// anything else (including input shorter than four bytes) is re-read from the
// start as one word per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use lexicon_dawg::format::{MAGIC, is_dawg_magic};
use lexicon_dawg::{AutomatonStore, DawgError};

use crate::{Lexicon, LexiconError};

/// Which loader handled a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryKind {
    /// Binary DAWG; replaced the lexicon's automaton.
    Binary,
    /// Plain-text word list; words went to the overlay.
    Text,
}

/// Classify a dictionary by its leading bytes.
pub fn detect_kind(prefix: &[u8]) -> DictionaryKind {
    if is_dawg_magic(prefix) {
        DictionaryKind::Binary
    } else {
        DictionaryKind::Text
    }
}

/// Read a binary DAWG and count the words it accepts.
///
/// The count comes from one full walk of the automaton and is what
/// [`Lexicon::len`] reports for the static part of the lexicon.
pub fn read_binary<R: Read + ?Sized>(reader: &mut R) -> Result<(AutomatonStore, usize), DawgError> {
    let store = AutomatonStore::read_from(reader)?;
    let word_count = store.word_count();
    tracing::debug!(
        edges = store.len(),
        start = store.start(),
        words = word_count,
        "loaded binary DAWG"
    );
    Ok((store, word_count))
}

/// Iterate over the words of a plain-text word list.
///
/// Each line is trimmed of surrounding whitespace (which also removes a
/// `\r` left by CRLF line endings). Lines that end up empty are skipped.
/// Invalid UTF-8 surfaces as an `InvalidData` I/O error.
pub fn text_words<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => {
            let word = line.trim();
            if word.is_empty() {
                None
            } else if word.len() == line.len() {
                Some(Ok(line))
            } else {
                Some(Ok(word.to_string()))
            }
        }
        Err(e) => Some(Err(e)),
    })
}

/// Load a dictionary from any reader into `lexicon`.
///
/// A binary dictionary replaces the lexicon's automaton only once it has been
/// read completely, so a failed binary load leaves `lexicon` untouched. A text
/// load adds words as it goes; words read before a failure stay added.
pub fn load_into<R: Read>(lexicon: &mut Lexicon, reader: R) -> Result<DictionaryKind, LexiconError> {
    let mut reader = BufReader::new(reader);
    let mut magic = [0u8; MAGIC.len()];
    let n = read_prefix(&mut reader, &mut magic)?;
    let kind = detect_kind(&magic[..n]);

    // Put the sniffed bytes back in front of the stream.
    let mut rewound = io::Cursor::new(&magic[..n]).chain(reader);

    match kind {
        DictionaryKind::Binary => {
            let (store, word_count) = read_binary(&mut rewound)?;
            lexicon.install_automaton(store, word_count);
        }
        DictionaryKind::Text => {
            let mut added = 0usize;
            for word in text_words(rewound) {
                if lexicon.add(&word?) {
                    added += 1;
                }
            }
            tracing::debug!(added, "loaded text word list");
        }
    }
    Ok(kind)
}

/// Open `path` and load it into `lexicon`, attaching the path to any error.
pub fn load_file_into(lexicon: &mut Lexicon, path: &Path) -> Result<DictionaryKind, LexiconError> {
    let file = File::open(path).map_err(|source| LexiconError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loading lexicon file");
    load_into(lexicon, file).map_err(|e| e.at_path(path.to_path_buf()))
}

/// Read up to `buf.len()` bytes, stopping early only at end of input.
fn read_prefix<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
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
