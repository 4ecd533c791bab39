// Depth-first enumeration of accepted words.
//
// The walk keeps an explicit stack instead of recursing: one frame per
// sibling run currently being scanned, plus the path spelled so far.

use lexicon_core::character::ordinal_letter;

use crate::MAX_WORD_LENGTH;
use crate::store::AutomatonStore;

/// Position inside one sibling run.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Edge currently being visited.
    index: usize,
    /// Whether the edge's letter is on the path and its children have been
    /// scheduled.
    entered: bool,
}

/// Iterator over every word a DAWG accepts.
///
/// Words are produced in pre-order: a word comes before its extensions, and
/// sibling runs are visited in storage order (alphabetical for well-formed
/// dictionaries). Since the graph is acyclic each accepting path is reported
/// exactly once; there is no cycle detection beyond the
/// [`MAX_WORD_LENGTH`] depth limit.
pub struct Words<'a> {
    store: &'a AutomatonStore,
    stack: Vec<Frame>,
    path: String,
}

impl<'a> Words<'a> {
    pub fn new(store: &'a AutomatonStore) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = store.root() {
            stack.push(Frame {
                index: root,
                entered: false,
            });
        }
        Self {
            store,
            stack,
            path: String::new(),
        }
    }

    /// Step to the next accepted word and borrow it.
    ///
    /// The returned slice is overwritten by the following call.
    pub fn advance(&mut self) -> Option<&str> {
        let store = self.store;
        let edges = store.edges();
        while let Some(frame) = self.stack.last_mut() {
            let Some(&edge) = edges.get(frame.index) else {
                // Run fell off the end of the buffer
                self.stack.pop();
                continue;
            };

            if !frame.entered {
                frame.entered = true;
                self.path
                    .push(ordinal_letter(edge.letter()).unwrap_or(char::REPLACEMENT_CHARACTER));
                if edge.has_children() && self.stack.len() < MAX_WORD_LENGTH {
                    self.stack.push(Frame {
                        index: edge.children_index() as usize,
                        entered: false,
                    });
                }
                if edge.accept() {
                    return Some(&self.path);
                }
                continue;
            }

            // Subtree below this edge is done; move along the run.
            self.path.pop();
            if edge.is_last_sibling() {
                self.stack.pop();
            } else {
                frame.index += 1;
                frame.entered = false;
            }
        }
        None
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.advance().map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;

    fn store(edges: Vec<Edge>, start: usize) -> AutomatonStore {
        AutomatonStore::new(edges, start)
    }

    #[test]
    fn empty_store_yields_nothing() {
        let s = AutomatonStore::default();
        assert_eq!(Words::new(&s).count(), 0);
    }

    #[test]
    fn prefix_word_before_extension() {
        // "a", "ab", "b"
        let s = store(
            vec![
                Edge::new(0, false, true, 0), // padding
                Edge::new(1, true, false, 3), // a -> run 3
                Edge::new(2, true, true, 0),  // b
                Edge::new(2, true, true, 0),  // a.b
            ],
            1,
        );
        let words: Vec<String> = Words::new(&s).collect();
        assert_eq!(words, ["a", "ab", "b"]);
    }

    #[test]
    fn shared_suffix_counted_per_path() {
        // "ab" and "cb" share one children run.
        let s = store(
            vec![
                Edge::new(0, false, true, 0),
                Edge::new(1, false, false, 3), // a -> 3
                Edge::new(3, false, true, 3),  // c -> 3
                Edge::new(2, true, true, 0),   // b
            ],
            1,
        );
        let words: Vec<String> = Words::new(&s).collect();
        assert_eq!(words, ["ab", "cb"]);
    }

    #[test]
    fn advance_reuses_buffer() {
        let s = store(
            vec![Edge::new(1, true, false, 0), Edge::new(2, true, true, 0)],
            0,
        );
        let mut walk = Words::new(&s);
        assert_eq!(walk.advance(), Some("a"));
        assert_eq!(walk.advance(), Some("b"));
        assert_eq!(walk.advance(), None);
        assert_eq!(walk.advance(), None);
    }

    #[test]
    fn cycle_is_bounded_by_depth_limit() {
        // A corrupt run that points back at itself.
        let s = store(
            vec![Edge::new(0, false, true, 0), Edge::new(1, true, true, 1)],
            1,
        );
        assert_eq!(Words::new(&s).count(), MAX_WORD_LENGTH);
    }
}
