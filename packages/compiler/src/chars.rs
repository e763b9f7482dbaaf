/*
 * Character Codes
 *
 * Characters the source locator looks at while scanning raw template text.
 */
#![allow(non_upper_case_globals)]

//! Character constants and classification helpers

// Special characters
pub const TAB: char = '\t';
pub const NEWLINE: char = '\n';
pub const FF: char = '\x0C';
pub const CR: char = '\r'; // Carriage return
pub const SPACE: char = ' ';

// Punctuation
pub const DQ: char = '"';
pub const MINUS: char = '-';
pub const PERIOD: char = '.';
pub const SLASH: char = '/';
pub const LT: char = '<';
pub const GT: char = '>';
pub const AT: char = '@';
pub const BACKSLASH: char = '\\';

// Letters (for quick checks)
pub const A: char = 'A';
pub const Z: char = 'Z';
pub const a: char = 'a';
pub const z: char = 'z';

/// Check if character is one of the HTML tag whitespace characters
/// (tab, line feed, form feed, carriage return, space)
pub fn is_whitespace(ch: char) -> bool {
    ch == SPACE || ch == TAB || ch == NEWLINE || ch == CR || ch == FF
}

/// Check if character is ASCII letter
pub fn is_ascii_letter(ch: char) -> bool {
    (a..=z).contains(&ch) || (A..=Z).contains(&ch)
}

/// Check if character can begin a tag name in raw source
pub fn is_tag_name_start(ch: char) -> bool {
    ch == AT || is_ascii_letter(ch)
}

/// Check if character ends a tag name in raw source
pub fn is_tag_name_end(ch: char) -> bool {
    ch == SLASH || ch == GT || is_whitespace(ch)
}

/// Upper case check that treats characters without case (digits, symbols)
/// as not upper case.
pub fn is_upper_case(ch: char) -> bool {
    let upper: String = ch.to_uppercase().collect();
    let lower: String = ch.to_lowercase().collect();
    upper != lower && upper.chars().eq(std::iter::once(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_whitespace() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\n'));
        assert!(is_whitespace('\r'));
        assert!(is_whitespace('\x0C'));
        assert!(!is_whitespace('a'));
        assert!(!is_whitespace('\u{00A0}'));
    }

    #[test]
    fn test_is_tag_name_start() {
        assert!(is_tag_name_start('@'));
        assert!(is_tag_name_start('F'));
        assert!(is_tag_name_start('f'));
        assert!(!is_tag_name_start('.'));
        assert!(!is_tag_name_start('1'));
        assert!(!is_tag_name_start('<'));
    }

    #[test]
    fn test_is_tag_name_end() {
        assert!(is_tag_name_end('/'));
        assert!(is_tag_name_end('>'));
        assert!(is_tag_name_end(' '));
        assert!(is_tag_name_end('\n'));
        assert!(!is_tag_name_end('.'));
        assert!(!is_tag_name_end('-'));
    }

    #[test]
    fn test_is_upper_case() {
        assert!(is_upper_case('F'));
        assert!(is_upper_case('É'));
        assert!(!is_upper_case('f'));
        assert!(!is_upper_case('1'));
        assert!(!is_upper_case('@'));
        assert!(!is_upper_case('-'));
    }
}
