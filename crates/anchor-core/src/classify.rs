use unicode_general_category::{get_general_category, GeneralCategory};

/// Check whether a code point counts as a word character.
///
/// Word characters are Unicode letters (general category `L*`) and numerals
/// (`Nd`, `Nl`, `No`). Everything else, including combining marks, is a
/// separator.
///
/// # Examples
///
/// ```
/// use anchor_core::classify::is_word_char;
///
/// assert!(is_word_char('a'));
/// assert!(is_word_char('世'));
/// assert!(is_word_char('½')); // No
/// assert!(is_word_char('𞤀')); // Adlam
/// assert!(!is_word_char('-'));
/// assert!(!is_word_char('\u{301}')); // combining acute accent
/// ```
pub fn is_word_char(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Simple lowercase mapping of a single code point.
///
/// Where the full mapping expands to several code points (`İ` -> `i̇`),
/// only the first is kept so every word character maps to exactly one
/// output character.
pub fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
