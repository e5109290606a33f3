//! Identifier and keyword lexing.
//!
//! This module handles words and their reclassification against the
//! caller's vocabulary.

use crate::chars::is_ident_continue;
use crate::token::TokenCategory;
use crate::Lexer;

impl<'a, 'v> Lexer<'a, 'v> {
    /// Lexes an identifier-like word.
    ///
    /// Words start with a letter or underscore, followed by letters, digits
    /// or underscores. After reading the word, checks it against the
    /// vocabulary.
    ///
    /// # Returns
    ///
    /// `Keyword`, `TypeName` or `Identifier`, in that order of precedence.
    pub fn lex_identifier(&mut self) -> TokenCategory {
        self.cursor.eat_while(is_ident_continue);
        self.vocabulary.classify(self.current_text())
    }
}
