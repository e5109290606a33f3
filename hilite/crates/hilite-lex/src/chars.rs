//! Character classes used by the recognition rules.
//!
//! Identifier characters are ASCII only. Anything outside these classes,
//! including every non-ASCII character, ends up in an operator run.

/// Checks if a character can start an identifier-like word.
///
/// Valid start characters are ASCII letters and underscore.
///
/// # Example
///
/// ```
/// use hilite_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier-like word.
///
/// Valid continuation characters are ASCII letters, ASCII digits and underscore.
/// The same class is used for the name part of a preprocessor directive.
///
/// # Example
///
/// ```
/// use hilite_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('9'));
/// assert!(is_ident_continue('_'));
/// assert!(!is_ident_continue('+'));
/// assert!(!is_ident_continue('é'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a decimal digit (`0-9`).
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is whitespace for tokenization purposes.
///
/// Only space, tab, line feed and carriage return count. Other Unicode
/// whitespace (form feed, no-break space, ...) is claimed by the operator rule.
///
/// # Example
///
/// ```
/// use hilite_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\r'));
/// assert!(!is_whitespace('\u{00A0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_start_excludes_digits() {
        for c in '0'..='9' {
            assert!(!is_ident_start(c));
            assert!(is_ident_continue(c));
            assert!(is_digit(c));
        }
    }

    #[test]
    fn test_ident_classes_ascii_only() {
        assert!(!is_ident_start('λ'));
        assert!(!is_ident_continue('λ'));
        assert!(!is_digit('٣')); // Arabic-Indic three
    }

    #[test]
    fn test_whitespace_set() {
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\n'));
        assert!(!is_whitespace('\u{000C}'));
        assert!(!is_whitespace('\u{2003}'));
    }
}
