//! Word-wise window matching.
//!
//! A query is split into lowercase words; a window matches when every word
//! appears somewhere in its app id or title. Word order does not matter and
//! there is no fuzziness beyond substring containment.

use crate::compositor::WindowRecord;

/// Split free-form query text into lowercase search words.
pub fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Text a window is matched against.
fn haystack(window: &WindowRecord) -> String {
    format!("{} {}", window.app_id, window.title).to_lowercase()
}

/// Check whether every token is a substring of the window's app id and title.
///
/// `tokens` must already be lowercase, as produced by [`tokenize`].
pub fn matches<S: AsRef<str>>(window: &WindowRecord, tokens: &[S]) -> bool {
    let haystack = haystack(window);
    tokens
        .iter()
        .all(|token| haystack.contains(token.as_ref()))
}
