//! Caller-supplied vocabularies.
//!
//! The lexer knows nothing about any particular language. Whether a word is
//! a keyword or a type name is decided by the [`Vocabulary`] passed in for
//! each call, which keeps the scanner reusable across languages and
//! documentation sets.

pub mod presets;

use rustc_hash::FxHashSet;

use crate::token::TokenCategory;

/// Keyword and type-name sets used to reclassify identifier-like words.
///
/// The two sets may overlap; [`classify`](Self::classify) gives keywords
/// precedence.
///
/// # Example
///
/// ```
/// use hilite_lex::{TokenCategory, Vocabulary};
///
/// let vocabulary = Vocabulary::new()
///     .with_keywords(["struct", "const"])
///     .with_type_names(["ScreenSettings"]);
///
/// assert_eq!(vocabulary.classify("const"), TokenCategory::Keyword);
/// assert_eq!(vocabulary.classify("ScreenSettings"), TokenCategory::TypeName);
/// assert_eq!(vocabulary.classify("width"), TokenCategory::Identifier);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    keywords: FxHashSet<String>,
    type_names: FxHashSet<String>,
}

impl Vocabulary {
    /// Creates an empty vocabulary. Every word classifies as an identifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds keywords, builder style.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Adds type names, builder style.
    pub fn with_type_names<I, S>(mut self, type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_names.extend(type_names.into_iter().map(Into::into));
        self
    }

    /// Adds a single keyword.
    pub fn add_keyword(&mut self, keyword: impl Into<String>) {
        self.keywords.insert(keyword.into());
    }

    /// Adds a single type name.
    pub fn add_type_name(&mut self, type_name: impl Into<String>) {
        self.type_names.insert(type_name.into());
    }

    /// Merges another vocabulary into this one (set union on both sides).
    pub fn extend(&mut self, other: &Vocabulary) {
        self.keywords.extend(other.keywords.iter().cloned());
        self.type_names.extend(other.type_names.iter().cloned());
    }

    /// Returns true if `word` is a keyword.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Returns true if `word` is a type name.
    pub fn is_type_name(&self, word: &str) -> bool {
        self.type_names.contains(word)
    }

    /// Classifies an identifier-like word.
    ///
    /// Returns `Keyword` if the word is a keyword, else `TypeName` if it is a
    /// type name, else `Identifier`. Matching is exact and case-sensitive.
    pub fn classify(&self, word: &str) -> TokenCategory {
        if self.is_keyword(word) {
            TokenCategory::Keyword
        } else if self.is_type_name(word) {
            TokenCategory::TypeName
        } else {
            TokenCategory::Identifier
        }
    }

    /// Iterates over the keywords in unspecified order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Iterates over the type names in unspecified order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.type_names.iter().map(String::as_str)
    }

    /// Number of keywords.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Number of type names.
    pub fn type_name_count(&self) -> usize {
        self.type_names.len()
    }

    /// Returns true if both sets are empty.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.type_names.is_empty()
    }
}
