//! String literal lexing.
//!
//! Strings are naive: there are no escape sequences, so a
//! backslash before `"` does not protect it, and a missing closing quote
//! simply extends the string to the end of input.

use crate::token::TokenCategory;
use crate::Lexer;

impl<'a, 'v> Lexer<'a, 'v> {
    /// Lexes a double-quoted string.
    ///
    /// Consumes the opening quote, then everything up to and including the
    /// next `"`. Newlines do not terminate a string.
    pub fn lex_string(&mut self) -> TokenCategory {
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '"');
        // closing quote, if any
        self.cursor.advance();
        TokenCategory::String
    }
}
