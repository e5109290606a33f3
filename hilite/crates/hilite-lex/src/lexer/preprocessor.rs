//! Preprocessor directive lexing.

use crate::chars::is_ident_continue;
use crate::token::TokenCategory;
use crate::Lexer;

impl<'a, 'v> Lexer<'a, 'v> {
    /// Lexes a `#` and the identifier characters that follow it.
    ///
    /// A lone `#` is a valid directive token. Whitespace between `#` and the
    /// name (`# define`) ends the token after the `#`.
    pub fn lex_preprocessor(&mut self) -> TokenCategory {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        TokenCategory::Preprocessor
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, Token, TokenCategory, Vocabulary};

    fn lex(source: &str) -> Vec<(String, TokenCategory)> {
        tokenize(source, &Vocabulary::new())
            .iter()
            .map(Token::to_owned_pair)
            .collect()
    }

    #[test]
    fn test_include() {
        let tokens = lex("#include <vector>");
        assert_eq!(tokens[0], ("#include".into(), TokenCategory::Preprocessor));
        assert_eq!(tokens[2], ("<".into(), TokenCategory::Operator));
        assert_eq!(tokens[3], ("vector".into(), TokenCategory::Identifier));
        assert_eq!(tokens[4], (">".into(), TokenCategory::Operator));
    }

    #[test]
    fn test_bare_hash() {
        assert_eq!(lex("#"), vec![("#".into(), TokenCategory::Preprocessor)]);
    }

    #[test]
    fn test_hash_then_space() {
        let tokens = lex("# define");
        assert_eq!(tokens[0], ("#".into(), TokenCategory::Preprocessor));
        assert_eq!(tokens[2], ("define".into(), TokenCategory::Identifier));
    }

    #[test]
    fn test_digits_and_underscores_in_name() {
        assert_eq!(
            lex("#if_1x"),
            vec![("#if_1x".into(), TokenCategory::Preprocessor)]
        );
    }

    #[test]
    fn test_token_pasting() {
        let tokens = lex("##");
        assert_eq!(
            tokens,
            vec![
                ("#".into(), TokenCategory::Preprocessor),
                ("#".into(), TokenCategory::Preprocessor),
            ]
        );
    }

    #[test]
    fn test_directive_ignores_vocabulary() {
        let vocabulary = Vocabulary::new().with_keywords(["define"]);
        let tokens = tokenize("#define", &vocabulary);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, TokenCategory::Preprocessor);
    }
}
