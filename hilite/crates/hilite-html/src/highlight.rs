//! The highlighting pipeline.

use hilite_lex::{tokenize, Vocabulary};
use tracing::debug;

use crate::normalize::normalize;
use crate::render::{render, RenderOptions};

/// Normalizes, tokenizes and renders code blocks with a fixed vocabulary
/// and set of render options.
///
/// A `Highlighter` holds no per-call state and can be shared between
/// threads.
#[derive(Clone, Debug, Default)]
pub struct Highlighter {
    vocabulary: Vocabulary,
    options: RenderOptions,
}

impl Highlighter {
    /// Creates a highlighter.
    pub fn new(vocabulary: Vocabulary, options: RenderOptions) -> Self {
        Self {
            vocabulary,
            options,
        }
    }

    /// The vocabulary used for classification.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The render options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Normalizes `source`, then tokenizes and renders it.
    pub fn highlight(&self, source: &str) -> String {
        self.highlight_raw(&normalize(source))
    }

    /// Tokenizes and renders `source` as is.
    pub fn highlight_raw(&self, source: &str) -> String {
        let tokens = tokenize(source, &self.vocabulary);
        debug!(bytes = source.len(), tokens = tokens.len(), "highlighted block");
        render(&tokens, &self.options)
    }
}
