//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while stepping through the input one Unicode scalar value at a time.
//! Byte offsets are only ever taken at character boundaries, so slices
//! handed back to the lexer are always valid `&str`.

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use hilite_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x");
///
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor.
    ///
    /// Returns '\0' (null character) if at the end of the source. Callers
    /// that need to tell a literal NUL from the end must check
    /// [`is_at_end`](Self::is_at_end).
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the cursor.
    ///
    /// # Arguments
    ///
    /// * `offset` - Number of characters to look ahead (0 = current)
    ///
    /// # Example
    ///
    /// ```
    /// use hilite_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("aβc");
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(1), 'β');
    /// assert_eq!(cursor.peek_char(2), 'c');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII (most common case)
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Advances the cursor past the current character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// Stops at end of input. Returns the number of characters consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use hilite_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 3);
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based, counted in characters).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// # Arguments
    ///
    /// * `start` - Starting byte position (inclusive), on a char boundary
    ///
    /// # Example
    ///
    /// ```
    /// use hilite_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("int x");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c != ' ');
    /// assert_eq!(cursor.slice_from(start), "int");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
