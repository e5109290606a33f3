//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the rule dispatch.

use crate::chars::{is_digit, is_ident_start, is_whitespace};
use crate::cursor::Cursor;
use crate::token::{Span, Token, TokenCategory};
use crate::vocab::Vocabulary;

/// Streaming tokenizer.
///
/// Yields tokens in input order until the input is exhausted. Holds no state
/// beyond its position, so independent lexers can run on different threads
/// without coordination.
///
/// # Example
///
/// ```
/// use hilite_lex::{Lexer, TokenCategory, Vocabulary};
///
/// let vocabulary = Vocabulary::new();
/// let mut lexer = Lexer::new("#pragma once", &vocabulary);
///
/// let token = lexer.next_token().unwrap();
/// assert_eq!(token.text, "#pragma");
/// assert_eq!(token.category, TokenCategory::Preprocessor);
/// assert_eq!(lexer.count(), 2);
/// ```
pub struct Lexer<'a, 'v> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Words that reclassify identifiers.
    pub(crate) vocabulary: &'v Vocabulary,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a, 'v> Lexer<'a, 'v> {
    /// Creates a new lexer over `source`.
    pub fn new(source: &'a str, vocabulary: &'v Vocabulary) -> Self {
        Self {
            cursor: Cursor::new(source),
            vocabulary,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// Exactly one rule is selected by the character under the cursor, in
    /// priority order: comment, preprocessor, number, identifier-like,
    /// string, whitespace, and finally operator.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.cursor.is_at_end() {
            return None;
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let category = match self.cursor.current_char() {
            '/' if self.cursor.peek_char(1) == '/' => self.lex_comment(),
            '#' => self.lex_preprocessor(),
            c if is_digit(c) => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            '"' => self.lex_string(),
            c if is_whitespace(c) => self.lex_whitespace(),
            _ => self.lex_operator(),
        };

        Some(self.finish_token(category))
    }

    /// Wraps the text consumed since `token_start` into a token.
    fn finish_token(&self, category: TokenCategory) -> Token<'a> {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(self.cursor.slice_from(self.token_start), category, span)
    }

    /// Returns the current text since the start of the token being lexed.
    pub(crate) fn current_text(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a, 'v> Iterator for Lexer<'a, 'v> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_, '_> {}
