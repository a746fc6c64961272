use crate::classify::{is_word_char, to_lower};

/// Like [`create`](crate::create), but compatible with GitHub heading anchors.
///
/// The text is trimmed, then every space or `-` becomes its own `-` (runs are
/// not collapsed), letters and numerals are lowercased, and all other
/// characters are removed without a trace.
///
/// # Examples
///
/// ```
/// use anchor_core::create_github;
///
/// assert_eq!(create_github("main.go"), "maingo");
/// assert_eq!(create_github("`-v` and `-vv`"), "-v-and--vv");
/// assert_eq!(create_github("A  B"), "a--b");
/// ```
pub fn create_github(text: &str) -> String {
    let mut anchor = String::with_capacity(text.len());

    for c in text.trim().chars() {
        if c == ' ' || c == '-' {
            anchor.push('-');
        } else if is_word_char(c) {
            anchor.push(to_lower(c));
        }
    }

    anchor
}
