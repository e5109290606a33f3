//! HTML escaping.
//!
//! Token text is copied verbatim from the input, so anything that is
//! markup-significant has to be escaped before it lands in a span.

/// Appends `text` to `out`, escaping `& < > " '`.
///
/// # Example
///
/// ```
/// use hilite_html::escape_html;
///
/// let mut out = String::new();
/// escape_html("a < b && c", &mut out);
/// assert_eq!(out, "a &lt; b &amp;&amp; c");
/// ```
pub fn escape_html(text: &str, out: &mut String) {
    let mut last = 0;
    for (index, byte) in text.bytes().enumerate() {
        let replacement = match byte {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        out.push_str(&text[last..index]);
        out.push_str(replacement);
        last = index + 1;
    }
    out.push_str(&text[last..]);
}

/// Returns an escaped copy of `text`.
pub fn escaped(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html(text, &mut out);
    out
}
