//! hilite-lex - Lexical classifier for syntax-highlighted source listings
//!
//! This crate splits a block of source text into an ordered sequence of
//! typed tokens so that each substring can be wrapped in a category-tagged
//! span by a renderer. It does not build a syntax tree and does not report
//! errors: every input, however malformed, produces a token sequence.
//!
//! # Example Usage
//!
//! ```
//! use hilite_lex::{tokenize, TokenCategory, Vocabulary};
//!
//! let vocabulary = Vocabulary::new().with_keywords(["int"]);
//! let tokens = tokenize("int x = 5;", &vocabulary);
//!
//! assert_eq!(tokens[0].text, "int");
//! assert_eq!(tokens[0].category, TokenCategory::Keyword);
//!
//! // Concatenating the token texts reproduces the input.
//! let joined: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(joined, "int x = 5;");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and category definitions
//! - [`lexer`] - The scanner and its recognition rules
//! - [`cursor`] - Character cursor for source traversal
//! - [`vocab`] - Caller-supplied keyword and type-name sets
//! - [`chars`] - Character classes shared by the rules
//!
//! # Recognition Rules
//!
//! At each position exactly one rule applies, tried in this order:
//!
//! 1. **Comment**: `//` through the end of the line (newline excluded)
//! 2. **Preprocessor**: `#` plus the identifier characters after it
//! 3. **Number**: a run of decimal digits, nothing else (`1.5f` is four tokens)
//! 4. **Identifier-like**: a word, reclassified as keyword or type name
//! 5. **String**: `"` up to and including the next `"`, or to end of input
//! 6. **Whitespace**: a run of space, tab, `\n`, `\r`
//! 7. **Operator**: everything else, stopping before a `//`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod token;
pub mod vocab;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{tokenize, tokenize_with, Lexer};
pub use token::{ParseCategoryError, Span, Token, TokenCategory};
pub use vocab::{presets, Vocabulary};
