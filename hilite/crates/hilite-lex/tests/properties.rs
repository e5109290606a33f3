//! Property tests for the tokenizer invariants.

use hilite_lex::{tokenize, Token, TokenCategory, Vocabulary};
use proptest::prelude::*;

/// Source-like text: mostly the characters that drive rule selection, with
/// some arbitrary Unicode mixed in.
fn source_text() -> impl Strategy<Value = String> {
    let interesting = prop::sample::select(vec![
        '/', '/', '#', '"', '\\', ' ', '\t', '\n', '\r', '_', 'a', 'Z', 'i', 'n', 't', '0', '7',
        '.', ';', '+', '*', '(', ')', '<', '>', '\0', 'é', '😀',
    ]);
    let any_char = any::<char>();
    prop::collection::vec(prop_oneof![4 => interesting, 1 => any_char], 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

fn vocabulary() -> Vocabulary {
    Vocabulary::new()
        .with_keywords(["int", "a", "tin"])
        .with_type_names(["Z", "int", "nat"])
}

proptest! {
    #[test]
    fn round_trip(source in source_text()) {
        let tokens = tokenize(&source, &vocabulary());
        let joined: String = tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(joined, source);
    }

    #[test]
    fn totality(source in source_text()) {
        let tokens = tokenize(&source, &vocabulary());
        prop_assert_eq!(tokens.is_empty(), source.is_empty());
        prop_assert!(tokens.iter().all(|t| !t.text.is_empty()));
    }

    #[test]
    fn spans_match_text(source in source_text()) {
        let tokens = tokenize(&source, &vocabulary());
        let mut offset = 0;
        for token in &tokens {
            prop_assert_eq!(token.span.start, offset);
            prop_assert_eq!(&source[token.span.start..token.span.end], token.text);
            offset = token.span.end;
        }
        prop_assert_eq!(offset, source.len());
    }

    #[test]
    fn single_token_retokenizes_to_itself(source in source_text()) {
        let vocabulary = vocabulary();
        for token in tokenize(&source, &vocabulary) {
            let again: Vec<Token> = tokenize(token.text, &vocabulary);
            prop_assert_eq!(again.len(), 1, "token {:?} split on its own", token.text);
            prop_assert_eq!(again[0].category, token.category);
        }
    }

    #[test]
    fn keyword_precedence(word in "[A-Za-z_][A-Za-z0-9_]{0,12}") {
        let vocabulary = Vocabulary::new()
            .with_keywords([word.clone()])
            .with_type_names([word.clone()]);
        let tokens = tokenize(&word, &vocabulary);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].category, TokenCategory::Keyword);
    }

    #[test]
    fn digit_runs_are_single_numbers(digits in "[0-9]{1,40}") {
        let tokens = tokenize(&digits, &Vocabulary::new());
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].category, TokenCategory::Number);
    }
}

#[test]
fn json_output_uses_tags() {
    let vocabulary = Vocabulary::new().with_type_names(["Vec2"]);
    let tokens = tokenize("Vec2 v", &vocabulary);
    let json = serde_json::to_string(&tokens).unwrap();
    assert!(json.contains(r#""category":"cr-type""#));
    assert!(json.contains(r#""category":"whitespace""#));
}
