//! Text normalization for embedded code blocks.
//!
//! Code blocks pulled out of documentation pages carry the indentation of
//! the surrounding markup and whatever line endings the page was saved
//! with. [`normalize`] produces the plain block the lexer expects.

/// Normalizes a code block.
///
/// 1. `\r\n` and lone `\r` become `\n`.
/// 2. Blank lines (only spaces and tabs) at the start and end are dropped.
/// 3. The longest leading whitespace prefix shared by all non-blank lines
///    is removed from every line. Blank lines inside the block become empty.
///
/// Lines are joined with `\n` and no trailing newline is added.
///
/// # Example
///
/// ```
/// use hilite_html::normalize;
///
/// let block = "\n    if (x)\n        y();\n\n    z();\n  ";
/// assert_eq!(normalize(block), "if (x)\n    y();\n\nz();");
/// ```
pub fn normalize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = unified.split('\n').collect();

    let Some(first) = lines.iter().position(|line| !is_blank(line)) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !is_blank(line))
        .unwrap_or(first);
    let block = &lines[first..=last];

    let indent = common_indent(block.iter().copied());

    let mut out = String::with_capacity(unified.len());
    for (index, line) in block.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        if !is_blank(line) {
            out.push_str(&line[indent.len()..]);
        }
    }
    out
}

/// Returns the longest run of leading spaces and tabs shared by every
/// non-blank line.
///
/// Prefixes are compared character by character, so a tab never matches a
/// space. Returns `""` when there are no non-blank lines.
///
/// # Example
///
/// ```
/// use hilite_html::common_indent;
///
/// assert_eq!(common_indent(["    a", "      b", "", "    c"]), "    ");
/// assert_eq!(common_indent(["\ta", "    b"]), "");
/// ```
pub fn common_indent<'a>(lines: impl IntoIterator<Item = &'a str>) -> &'a str {
    let mut common: Option<&'a str> = None;

    for line in lines.into_iter().filter(|line| !is_blank(line)) {
        let indent = leading_whitespace(line);
        common = Some(match common {
            None => indent,
            Some(current) => shared_prefix(current, indent),
        });
        if common == Some("") {
            break;
        }
    }

    common.unwrap_or("")
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c == ' ' || c == '\t')
}

fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

fn shared_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_normalized() {
        assert_eq!(normalize("int x;\nint y;"), "int x;\nint y;");
    }

    #[test]
    fn test_strips_common_indent() {
        assert_eq!(normalize("  a\n    b\n  c"), "a\n  b\nc");
    }

    #[test]
    fn test_crlf_and_cr() {
        assert_eq!(normalize("  a\r\n  b\r  c"), "a\nb\nc");
    }

    #[test]
    fn test_trims_blank_edges() {
        assert_eq!(normalize("\n\t\n  x\n \n"), "x");
    }

    #[test]
    fn test_interior_blank_line_emptied() {
        assert_eq!(normalize("    a\n  \n    b"), "a\n\nb");
    }

    #[test]
    fn test_blank_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t\n"), "");
    }

    #[test]
    fn test_mixed_tabs_and_spaces() {
        assert_eq!(normalize("\t a\n\t b"), "a\nb");
        assert_eq!(normalize("\ta\n b"), "\ta\n b");
    }

    #[test]
    fn test_trailing_whitespace_kept() {
        assert_eq!(normalize("  a  \n  b"), "a  \nb");
    }

    #[test]
    fn test_common_indent_empty() {
        let none: [&str; 0] = [];
        assert_eq!(common_indent(none), "");
        assert_eq!(common_indent(["", "  "]), "");
    }
}
