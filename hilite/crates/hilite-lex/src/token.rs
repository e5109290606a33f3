//! Token type definitions.
//!
//! A [`Token`] is a non-empty slice of the input paired with the
//! [`TokenCategory`] the lexer assigned to it. Categories carry a stable
//! lowercase tag that renderers use as a style class.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Classification of a token.
///
/// The set is closed; renderers may rely on exactly these nine values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenCategory {
    /// `//` line comment, newline excluded.
    Comment,
    /// `#` followed by identifier characters, e.g. `#include`.
    Preprocessor,
    /// Double-quoted string, possibly unterminated.
    String,
    /// Run of decimal digits.
    Number,
    /// Word not found in either vocabulary.
    Identifier,
    /// Word found in the keyword vocabulary.
    Keyword,
    /// Word found in the type-name vocabulary (and not a keyword).
    TypeName,
    /// Run of spaces, tabs, line feeds and carriage returns.
    Whitespace,
    /// Anything else.
    Operator,
}

impl TokenCategory {
    /// All categories, in declaration order.
    pub const ALL: [TokenCategory; 9] = [
        TokenCategory::Comment,
        TokenCategory::Preprocessor,
        TokenCategory::String,
        TokenCategory::Number,
        TokenCategory::Identifier,
        TokenCategory::Keyword,
        TokenCategory::TypeName,
        TokenCategory::Whitespace,
        TokenCategory::Operator,
    ];

    /// Returns the external tag used for styling.
    ///
    /// Type names are tagged `cr-type`, not `typename`; existing style
    /// sheets depend on that label.
    ///
    /// # Example
    ///
    /// ```
    /// use hilite_lex::TokenCategory;
    ///
    /// assert_eq!(TokenCategory::Keyword.tag(), "keyword");
    /// assert_eq!(TokenCategory::TypeName.tag(), "cr-type");
    /// ```
    pub const fn tag(self) -> &'static str {
        match self {
            TokenCategory::Comment => "comment",
            TokenCategory::Preprocessor => "preprocessor",
            TokenCategory::String => "string",
            TokenCategory::Number => "number",
            TokenCategory::Identifier => "identifier",
            TokenCategory::Keyword => "keyword",
            TokenCategory::TypeName => "cr-type",
            TokenCategory::Whitespace => "whitespace",
            TokenCategory::Operator => "operator",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing an unknown category tag.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown token category tag `{0}`")]
pub struct ParseCategoryError(pub String);

impl FromStr for TokenCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenCategory::ALL
            .into_iter()
            .find(|category| category.tag() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl Serialize for TokenCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// Location of a token in the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Line of the first character (1-based).
    pub line: u32,
    /// Column of the first character (1-based, in characters).
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A classified slice of the input.
///
/// `text` borrows from the tokenized input and is never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    /// The exact input text covered by this token.
    pub text: &'a str,
    /// The category assigned by the lexer.
    pub category: TokenCategory,
    /// Where the token sits in the input.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    pub fn new(text: &'a str, category: TokenCategory, span: Span) -> Self {
        Self {
            text,
            category,
            span,
        }
    }

    /// Returns an owned `(text, category)` pair, dropping the span.
    pub fn to_owned_pair(&self) -> (String, TokenCategory) {
        (self.text.to_string(), self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_lowercase_and_unique() {
        let mut tags: Vec<&str> = TokenCategory::ALL.iter().map(|c| c.tag()).collect();
        assert!(tags.iter().all(|t| t.chars().all(|c| c.is_ascii_lowercase() || c == '-')));
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), TokenCategory::ALL.len());
    }

    #[test]
    fn test_tag_parse_back() {
        for category in TokenCategory::ALL {
            assert_eq!(category.tag().parse::<TokenCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_internal_name_is_not_a_tag() {
        let err = "typename".parse::<TokenCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown token category tag `typename`");
    }

    #[test]
    fn test_display_uses_tag() {
        assert_eq!(TokenCategory::Preprocessor.to_string(), "preprocessor");
        assert_eq!(format!("{}", TokenCategory::TypeName), "cr-type");
    }

    #[test]
    fn test_serialize_token() {
        let token = Token::new("Vec2", TokenCategory::TypeName, Span::new(0, 4, 1, 1));
        let json = serde_json::to_value(token).unwrap();
        assert_eq!(json["text"], "Vec2");
        assert_eq!(json["category"], "cr-type");
        assert_eq!(json["span"]["end"], 4);
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(3, 7, 1, 4);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::default().is_empty());
    }

    #[test]
    fn test_owned_pair() {
        let token = Token::new("42", TokenCategory::Number, Span::new(0, 2, 1, 1));
        assert_eq!(token.to_owned_pair(), ("42".to_string(), TokenCategory::Number));
    }
}
