//! hilite-html - HTML output for hilite token streams
//!
//! This crate turns the token stream produced by `hilite-lex` into markup
//! and provides the text normalizer that prepares embedded code blocks
//! before they are tokenized.
//!
//! # Example Usage
//!
//! ```
//! use hilite_html::{Highlighter, RenderOptions};
//! use hilite_lex::Vocabulary;
//!
//! let highlighter = Highlighter::new(
//!     Vocabulary::new().with_keywords(["int"]),
//!     RenderOptions { wrap: false, ..RenderOptions::default() },
//! );
//!
//! let html = highlighter.highlight("    int x;\n");
//! assert_eq!(
//!     html,
//!     "<span class=\"keyword\">int</span>\
//!      <span class=\"whitespace\"> </span>\
//!      <span class=\"identifier\">x</span>\
//!      <span class=\"operator\">;</span>"
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`normalize`] - Newline normalization and de-indentation
//! - [`escape`] - HTML escaping of token text
//! - [`render`] - Token stream to span markup
//! - [`highlight`] - The normalize, tokenize, render pipeline

#![warn(missing_docs)]

pub mod escape;
pub mod highlight;
pub mod normalize;
pub mod render;

pub use escape::{escape_html, escaped};
pub use highlight::Highlighter;
pub use normalize::{common_indent, normalize};
pub use render::{render, RenderOptions};
