//! Byte cursor over the input with line/column tracking.

/// Indentation weight of a tab. Tabs are not valid YAML indentation, but the
/// scanner tolerates them and counts each as two columns.
pub const TAB_WIDTH: usize = 2;

/// Position in the input. `line` and `column` are 1-based.
///
/// The cursor is `Copy`: look-ahead copies it, scans forward, and drops the
/// copy, leaving the original untouched.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    /// Offset just past the last line break consumed.
    line_start: usize,
}

#[inline]
pub(crate) fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

#[inline]
pub(crate) fn is_break(b: u8) -> bool {
    matches!(b, b'\n' | b'\r')
}

/// Space, tab, line break, or end of input.
#[inline]
pub(crate) fn is_blank_or_end(b: Option<u8>) -> bool {
    match b {
        None => true,
        Some(b) => is_blank(b) || is_break(b),
    }
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
            line_start: 0,
        }
    }

    #[inline]
    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes().get(self.pos + offset).copied()
    }

    /// The full character at the cursor, for error messages.
    pub fn peek_char(&self) -> Option<char> {
        self.input.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    /// Text between `start` and the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume one byte. A `\n`, or a `\r` not followed by `\n`, ends a line.
    #[inline]
    pub fn advance(&mut self) {
        let Some(b) = self.peek() else {
            return;
        };
        self.pos += 1;
        if is_break(b) {
            self.line_start = self.pos;
        }
        if b == b'\n' || (b == b'\r' && self.peek() != Some(b'\n')) {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Move to an absolute offset at or after the current one.
    pub fn advance_to(&mut self, target: usize) {
        while self.pos < target && !self.is_eof() {
            self.advance();
        }
    }

    pub fn skip_spaces_tabs(&mut self) {
        while let Some(b) = self.peek() {
            if !is_blank(b) {
                break;
            }
            self.advance();
        }
    }

    /// Consume `#` through the end of the line, leaving the line break.
    pub fn skip_comment(&mut self) {
        if self.peek() != Some(b'#') {
            return;
        }
        while let Some(b) = self.peek() {
            if is_break(b) {
                break;
            }
            self.advance();
        }
    }

    pub fn skip_whitespace_and_comments(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => self.advance(),
                b'#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Consume through the next line terminator (`\n`, `\r`, or `\r\n`).
    pub fn skip_to_next_line(&mut self) {
        while let Some(b) = self.peek() {
            self.advance();
            if b == b'\n' {
                return;
            }
            if b == b'\r' {
                if self.peek() == Some(b'\n') {
                    self.advance();
                }
                return;
            }
        }
    }

    /// True when only a comment or line break remains on this line.
    pub fn at_line_end(&self) -> bool {
        match self.peek() {
            None => true,
            Some(b) => is_break(b) || b == b'#',
        }
    }

    /// `-` followed by a space, tab, line break, or end of input.
    pub fn is_sequence_indicator(&self) -> bool {
        self.peek() == Some(b'-') && is_blank_or_end(self.peek_at(1))
    }

    #[inline]
    fn line_start(&self) -> usize {
        self.line_start
    }

    /// Width of the leading spaces (1 each) and tabs (2 each) on the
    /// current line. Read-only.
    pub fn line_indent(&self) -> usize {
        let mut width = 0usize;
        for &b in &self.bytes()[self.line_start()..] {
            match b {
                b' ' => width += 1,
                b'\t' => width += TAB_WIDTH,
                _ => break,
            }
        }
        width
    }

    /// Width from the line start to the cursor, tabs weighted as in
    /// [`Cursor::line_indent`].
    pub fn column_width(&self) -> usize {
        self.bytes()[self.line_start()..self.pos]
            .iter()
            .map(|&b| if b == b'\t' { TAB_WIDTH } else { 1 })
            .sum()
    }

    /// True when everything before the cursor on this line is indentation.
    pub fn at_line_start_content(&self) -> bool {
        self.bytes()[self.line_start()..self.pos]
            .iter()
            .all(|&b| is_blank(b))
    }

    fn at_marker(&self, marker: &[u8; 3]) -> bool {
        self.pos == self.line_start()
            && self.bytes()[self.pos..].starts_with(marker)
            && is_blank_or_end(self.peek_at(3))
    }

    /// `---` at column 1.
    pub fn is_document_start(&self) -> bool {
        self.at_marker(b"---")
    }

    /// `...` at column 1.
    pub fn is_document_end(&self) -> bool {
        self.at_marker(b"...")
    }

    pub fn is_document_marker(&self) -> bool {
        self.is_document_start() || self.is_document_end()
    }
}
