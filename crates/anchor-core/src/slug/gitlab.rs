use crate::classify::{is_word_char, to_lower};

/// Like [`create`](crate::create), but compatible with GitLab heading anchors.
///
/// Same as [`create_github`](crate::create_github) except that runs of
/// spaces and dashes collapse into a single `-`.
///
/// # Examples
///
/// ```
/// use anchor_core::create_gitlab;
///
/// assert_eq!(create_gitlab("This is also          a header"), "this-is-also-a-header");
/// assert_eq!(create_gitlab("-This is two"), "-this-is-two");
/// ```
pub fn create_gitlab(text: &str) -> String {
    let mut anchor = String::with_capacity(text.len());
    let mut last_was_dash = false;

    for c in text.trim().chars() {
        if c == ' ' || c == '-' {
            if !last_was_dash {
                anchor.push('-');
                last_was_dash = true;
            }
        } else if is_word_char(c) {
            anchor.push(to_lower(c));
            last_was_dash = false;
        }
    }

    anchor
}
