// Whole-word case folding.

use crate::character::simple_lower;

/// Fold a word to the lowercase form used for storage and lookup.
///
/// Folding is character-by-character through [`simple_lower`], so the result
/// has the same number of characters as the input.
pub fn fold_case(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}

/// Returns `true` if `word` is already in folded form.
///
/// Lets callers skip the allocation in [`fold_case`] for the common case of
/// lowercase input.
pub fn is_folded(word: &str) -> bool {
    word.chars().all(|c| simple_lower(c) == c)
}

/// Fold a word, borrowing it unchanged when it is already folded.
pub fn fold_case_cow(word: &str) -> std::borrow::Cow<'_, str> {
    if is_folded(word) {
        std::borrow::Cow::Borrowed(word)
    } else {
        std::borrow::Cow::Owned(fold_case(word))
    }
}
