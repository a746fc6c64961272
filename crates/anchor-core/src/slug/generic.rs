use crate::classify::{is_word_char, to_lower};

/// Create a sanitized anchor name for the given text.
///
/// Rules:
/// - Unicode letters and numerals are kept, lowercased
/// - Any run of other characters between two of them becomes a single `-`
/// - Leading and trailing runs are dropped
///
/// # Examples
///
/// ```
/// use anchor_core::create;
///
/// assert_eq!(create("This is a header"), "this-is-a-header");
/// assert_eq!(create("This is also          a header"), "this-is-also-a-header");
/// assert_eq!(create("main.go"), "main-go");
/// assert_eq!(create("Article 123"), "article-123");
/// assert_eq!(create("<- Let's try this, shall we?"), "let-s-try-this-shall-we");
/// assert_eq!(create("        "), "");
/// assert_eq!(create("Hello, 世界"), "hello-世界");
/// ```
pub fn create(text: &str) -> String {
    let mut anchor = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if is_word_char(c) {
            // A dash is only ever written between two word characters
            if pending_dash && !anchor.is_empty() {
                anchor.push('-');
            }
            pending_dash = false;
            anchor.push(to_lower(c));
        } else {
            pending_dash = true;
        }
    }

    anchor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_collapses_separators() {
        assert_eq!(create("a - . - b"), "a-b");
        assert_eq!(create("a\t\nb"), "a-b");
        assert_eq!(create("snake_case_name"), "snake-case-name");
    }

    #[test]
    fn test_create_drops_leading_and_trailing() {
        assert_eq!(create("---This is four"), "this-is-four");
        assert_eq!(create("header!!!"), "header");
        assert_eq!(create(" Header 6\n"), "header-6");
    }

    #[test]
    fn test_create_separator_only_is_empty() {
        assert_eq!(create(""), "");
        assert_eq!(create("-"), "");
        assert_eq!(create("!?-- ..."), "");
        assert_eq!(create("🎉🎉"), "");
    }

    #[test]
    fn test_create_unicode() {
        assert_eq!(
            create("This header has Unicode in it: 한글"),
            "this-header-has-unicode-in-it-한글"
        );
        assert_eq!(create("ÜBER Straße"), "über-straße");
        assert_eq!(create("🎉 Party"), "party");
        // Combining marks are not word characters
        assert_eq!(create("cafe\u{301} au lait"), "cafe-au-lait");
    }

    #[test]
    fn test_create_is_stable_on_slugs() {
        let once = create("--This is  - a eight");
        assert_eq!(once, "this-is-a-eight");
        assert_eq!(create(&once), once);
    }
}
