//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and rule dispatch
//! - `comment` - `//` line comments
//! - `preprocessor` - `#` directives
//! - `number` - Decimal digit runs
//! - `identifier` - Words, keywords and type names
//! - `string` - Double-quoted strings
//! - `whitespace` - Whitespace runs
//! - `operator` - Fallback operator runs

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod preprocessor;
mod string;
mod whitespace;

pub use self::core::Lexer;

use crate::token::Token;
use crate::vocab::Vocabulary;

/// Tokenizes `input` against `vocabulary`.
///
/// Never fails. The returned tokens are in input order, each is non-empty,
/// and their texts concatenate back to `input`.
///
/// # Example
///
/// ```
/// use hilite_lex::{tokenize, TokenCategory, Vocabulary};
///
/// let tokens = tokenize("a / b // half", &Vocabulary::new());
/// let categories: Vec<_> = tokens.iter().map(|t| t.category).collect();
/// assert_eq!(
///     categories,
///     vec![
///         TokenCategory::Identifier,
///         TokenCategory::Whitespace,
///         TokenCategory::Operator,
///         TokenCategory::Whitespace,
///         TokenCategory::Identifier,
///         TokenCategory::Whitespace,
///         TokenCategory::Comment,
///     ]
/// );
/// ```
pub fn tokenize<'a>(input: &'a str, vocabulary: &Vocabulary) -> Vec<Token<'a>> {
    Lexer::new(input, vocabulary).collect()
}

/// Tokenizes `input` with separate keyword and type-name collections.
///
/// Convenience form of [`tokenize`] for callers that hold the two word lists
/// separately.
pub fn tokenize_with<'a, K, T>(input: &'a str, keywords: K, type_names: T) -> Vec<Token<'a>>
where
    K: IntoIterator,
    K::Item: Into<String>,
    T: IntoIterator,
    T::Item: Into<String>,
{
    let vocabulary = Vocabulary::new()
        .with_keywords(keywords)
        .with_type_names(type_names);
    tokenize(input, &vocabulary)
}
