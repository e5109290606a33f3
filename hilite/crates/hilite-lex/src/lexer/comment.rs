//! Comment lexing.
//!
//! Only `//` line comments exist. Block comments are not recognized: `/*`
//! is an operator run like any other punctuation.

use crate::token::TokenCategory;
use crate::Lexer;

impl<'a, 'v> Lexer<'a, 'v> {
    /// Lexes a line comment (from `//` to end of line).
    ///
    /// The terminating newline is left for the whitespace rule. A comment on
    /// the last line runs to end of input.
    pub fn lex_comment(&mut self) -> TokenCategory {
        self.cursor.advance();
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '\n');
        TokenCategory::Comment
    }
}
