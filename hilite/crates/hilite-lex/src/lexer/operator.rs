//! Operator and punctuation lexing.
//!
//! The operator rule is the fallback: it claims whatever no other rule
//! starts on, which makes tokenization total.

use crate::chars::{is_ident_continue, is_whitespace};
use crate::token::TokenCategory;
use crate::Lexer;

impl<'a, 'v> Lexer<'a, 'v> {
    /// Lexes a maximal operator run.
    ///
    /// The first character is always consumed. The run then continues over
    /// characters that are not identifier characters, not `"`, not
    /// whitespace, and not the start of a `//` comment. Because only the
    /// `//` pair is excluded, `a/b` keeps `/` as division while `a//b`
    /// starts a comment.
    pub fn lex_operator(&mut self) -> TokenCategory {
        self.cursor.advance();
        while !self.cursor.is_at_end() && self.at_operator_char() {
            self.cursor.advance();
        }
        TokenCategory::Operator
    }

    fn at_operator_char(&self) -> bool {
        let c = self.cursor.current_char();
        if is_ident_continue(c) || c == '"' || is_whitespace(c) {
            return false;
        }
        !(c == '/' && self.cursor.peek_char(1) == '/')
    }
}
