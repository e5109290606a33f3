//! Whitespace lexing.

use crate::chars::is_whitespace;
use crate::token::TokenCategory;
use crate::Lexer;

impl<'a, 'v> Lexer<'a, 'v> {
    /// Lexes a maximal run of spaces, tabs, line feeds and carriage returns.
    ///
    /// Whitespace is kept as tokens so the output reproduces the layout of
    /// the input.
    pub fn lex_whitespace(&mut self) -> TokenCategory {
        self.cursor.eat_while(is_whitespace);
        TokenCategory::Whitespace
    }
}
