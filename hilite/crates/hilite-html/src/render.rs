//! Token stream to HTML.
//!
//! Every token becomes one `<span>` whose class is the category tag, so the
//! rendered markup has exactly one span per token and the concatenated
//! span contents, unescaped, equal the input.

use serde::{Deserialize, Serialize};

use hilite_lex::Token;

use crate::escape::escape_html;

/// Options controlling the generated markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Prepended to every class name, e.g. `"hl-"` gives `hl-keyword`.
    pub class_prefix: String,

    /// Wrap the spans in `<pre><code>`.
    pub wrap: bool,

    /// Adds `class="language-…"` to the `<code>` element when wrapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class_prefix: String::new(),
            wrap: true,
            language: None,
        }
    }
}

/// Renders tokens as category-tagged spans.
///
/// # Example
///
/// ```
/// use hilite_html::{render, RenderOptions};
/// use hilite_lex::{tokenize, Vocabulary};
///
/// let tokens = tokenize("a<b", &Vocabulary::new());
/// let options = RenderOptions { wrap: false, ..RenderOptions::default() };
///
/// assert_eq!(
///     render(&tokens, &options),
///     "<span class=\"identifier\">a</span>\
///      <span class=\"operator\">&lt;</span>\
///      <span class=\"identifier\">b</span>"
/// );
/// ```
pub fn render(tokens: &[Token<'_>], options: &RenderOptions) -> String {
    let text_len: usize = tokens.iter().map(|t| t.text.len()).sum();
    let mut out = String::with_capacity(text_len * 2 + tokens.len() * 32);

    if options.wrap {
        open_block(&mut out, options);
    }

    for token in tokens {
        out.push_str("<span class=\"");
        escape_html(&options.class_prefix, &mut out);
        out.push_str(token.category.tag());
        out.push_str("\">");
        escape_html(token.text, &mut out);
        out.push_str("</span>");
    }

    if options.wrap {
        out.push_str("</code></pre>");
    }

    out
}

fn open_block(out: &mut String, options: &RenderOptions) {
    out.push_str("<pre class=\"");
    escape_html(&options.class_prefix, out);
    out.push_str("code\"><code");
    if let Some(language) = &options.language {
        out.push_str(" class=\"language-");
        escape_html(language, out);
        out.push('"');
    }
    out.push('>');
}
