//! Number literal lexing.
//!
//! Numbers are runs of decimal digits and nothing more. Signs, decimal
//! points, exponents, radix prefixes and suffixes all belong to other tokens.

use crate::chars::is_digit;
use crate::token::TokenCategory;
use crate::Lexer;

impl<'a, 'v> Lexer<'a, 'v> {
    /// Lexes a maximal run of decimal digits.
    pub fn lex_number(&mut self) -> TokenCategory {
        self.cursor.eat_while(is_digit);
        TokenCategory::Number
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
    fn test_integer() {
        assert_eq!(lex("0042"), vec![("0042".into(), TokenCategory::Number)]);
    }

    #[test]
    fn test_hex_splits_after_zero() {
        assert_eq!(
            lex("0xFF"),
            vec![
                ("0".into(), TokenCategory::Number),
                ("xFF".into(), TokenCategory::Identifier),
            ]
        );
    }

    #[test]
    fn test_negative_number() {
        assert_eq!(
            lex("-7"),
            vec![
                ("-".into(), TokenCategory::Operator),
                ("7".into(), TokenCategory::Number),
            ]
        );
    }

    #[test]
    fn test_exponent() {
        assert_eq!(
            lex("1e10"),
            vec![
                ("1".into(), TokenCategory::Number),
                ("e10".into(), TokenCategory::Identifier),
            ]
        );
    }

    #[test]
    fn test_leading_dot() {
        assert_eq!(
            lex(".5"),
            vec![
                (".".into(), TokenCategory::Operator),
                ("5".into(), TokenCategory::Number),
            ]
        );
    }
}
