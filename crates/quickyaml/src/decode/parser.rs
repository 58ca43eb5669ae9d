//! Single-pass recursive-descent parser producing [`Value`]s directly.

use log::{debug, trace, warn};

use crate::decode::cursor::{Cursor, is_blank, is_blank_or_end, is_break};
use crate::decode::scalar::interpret;
use crate::decode::strings::scan_quoted;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::value::{Mapping, Value};

const BOM: &str = "\u{FEFF}";

#[derive(Clone, Copy)]
enum Entry {
    Key,
    Item,
}

pub struct Parser<'a> {
    cur: Cursor<'a>,
    strict: bool,
    max_depth: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn from_input(input: &'a str) -> Self {
        Self::with_options(input, &Options::default())
    }

    pub fn with_options(input: &'a str, options: &Options) -> Self {
        let input = input.strip_prefix(BOM).unwrap_or(input);
        Self {
            cur: Cursor::new(input),
            strict: options.strict,
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// Parse one document. Content after the first complete value is ignored.
    pub fn parse_document(&mut self) -> Result<Value> {
        self.cur.skip_whitespace_and_comments();
        self.skip_document_start();
        self.parse_value(self.cur.column_width())
    }

    /// Parse every `---`-separated document in the stream.
    pub fn parse_documents(&mut self) -> Result<Vec<Value>> {
        let mut docs = Vec::new();
        loop {
            self.cur.skip_whitespace_and_comments();
            if self.cur.is_document_end() {
                self.cur.skip_to_next_line();
                continue;
            }
            if self.cur.is_eof() {
                break;
            }
            let line = self.cur.line();
            docs.push(self.parse_document()?);
            self.cur.skip_whitespace_and_comments();
            if !(self.cur.is_document_marker() || self.cur.is_eof()) {
                warn!(
                    "document starting at line {} ends early; ignoring input from line {}",
                    line,
                    self.cur.line()
                );
                break;
            }
        }
        Ok(docs)
    }

    fn skip_document_start(&mut self) {
        if self.cur.is_document_start() {
            self.cur.advance_by(3);
            self.cur.skip_spaces_tabs();
            self.cur.skip_comment();
        }
    }

    /// Count one more open collection. Every collection parser calls this on
    /// entry and [`Parser::ascend`] on success; after an error the parser is
    /// not resumed, so the count is left as is.
    fn descend(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(self.depth_limit());
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    #[cold]
    fn depth_limit(&self) -> Error {
        Error::DepthLimit {
            line: self.cur.line(),
            limit: self.max_depth,
        }
    }

    /// Value dispatcher.
    ///
    /// `indent` is the baseline a block collection adopts when it starts
    /// mid-line (after `- `); one that starts a line takes the line's own
    /// indentation.
    fn parse_value(&mut self, indent: usize) -> Result<Value> {
        self.cur.skip_whitespace_and_comments();
        let Some(b) = self.cur.peek() else {
            return Ok(Value::Null);
        };
        if self.cur.is_document_marker() {
            return Ok(Value::Null);
        }
        let baseline = if self.cur.at_line_start_content() {
            self.cur.line_indent()
        } else {
            indent
        };
        match b {
            b'{' => {
                trace!("line {}: flow mapping", self.cur.line());
                let v = self.parse_flow_mapping()?;
                self.finish_line();
                Ok(v)
            }
            b'[' => {
                trace!("line {}: flow sequence", self.cur.line());
                let v = self.parse_flow_sequence()?;
                self.finish_line();
                Ok(v)
            }
            _ if self.cur.is_sequence_indicator() => {
                trace!("line {}: block sequence at {}", self.cur.line(), baseline);
                self.parse_block_sequence(baseline)
            }
            _ if self.looks_like_mapping_entry() => {
                trace!("line {}: block mapping at {}", self.cur.line(), baseline);
                self.parse_block_mapping(baseline)
            }
            _ => {
                let v = self.parse_block_scalar()?;
                self.finish_line();
                Ok(v)
            }
        }
    }

    /// Look ahead on the current line for a `:` followed by a blank or end of
    /// line. A leading quoted span is skipped first so a colon inside it is
    /// not mistaken for the key indicator.
    fn looks_like_mapping_entry(&self) -> bool {
        let mut ahead = self.cur;
        if matches!(ahead.peek(), Some(b'"' | b'\'')) {
            let line = ahead.line();
            if scan_quoted(&mut ahead).is_err() || ahead.line() != line {
                return false;
            }
        }
        let mut prev_blank = false;
        while let Some(b) = ahead.peek() {
            match b {
                b'\n' | b'\r' => return false,
                b':' if is_blank_or_end(ahead.peek_at(1)) => return true,
                b'#' if prev_blank => return false,
                _ => {}
            }
            prev_blank = is_blank(b);
            ahead.advance();
        }
        false
    }

    /// Skip a trailing comment after a complete value. Anything else left on
    /// the line is dropped.
    fn finish_line(&mut self) {
        self.cur.skip_spaces_tabs();
        if self.cur.at_line_end() {
            self.cur.skip_comment();
            return;
        }
        warn!(
            "line {}: ignoring trailing content {:?}",
            self.cur.line(),
            self.cur.rest().lines().next().unwrap_or_default()
        );
        self.cur.skip_to_next_line();
    }

    // ---- block collections -------------------------------------------------

    fn parse_block_mapping(&mut self, baseline: usize) -> Result<Value> {
        self.descend()?;
        debug!(
            "block mapping at line {} (indent {})",
            self.cur.line(),
            baseline
        );
        let mut map = Mapping::new();
        loop {
            let key_line = self.cur.line();
            let key = self.parse_block_key()?;
            self.cur.skip_spaces_tabs();
            if self.cur.peek() != Some(b':') {
                return Err(missing_colon(key_line, &key));
            }
            self.cur.advance();
            self.cur.skip_spaces_tabs();
            let value = if self.cur.at_line_end() {
                self.parse_nested_block_value(baseline, Entry::Key)
            } else {
                self.parse_inline_value()
            }
            .map_err(|e| Error::in_key(&key, e))?;
            if map.insert(key.as_str(), value).is_some() {
                debug!("line {}: duplicate key '{}' replaced", key_line, key);
            }
            if !self.next_entry(baseline, Entry::Key)? {
                break;
            }
        }
        self.ascend();
        Ok(Value::Mapping(map))
    }

    fn parse_block_sequence(&mut self, baseline: usize) -> Result<Value> {
        self.descend()?;
        debug!(
            "block sequence at line {} (indent {})",
            self.cur.line(),
            baseline
        );
        let mut items = Vec::new();
        loop {
            self.cur.advance();
            self.cur.skip_spaces_tabs();
            let index = items.len();
            let item = if self.cur.at_line_end() {
                self.parse_nested_block_value(baseline, Entry::Item)
            } else {
                let inline_indent = self.cur.column_width();
                self.parse_value(inline_indent)
            }
            .map_err(|e| Error::in_index(index, e))?;
            items.push(item);
            if !self.next_entry(baseline, Entry::Item)? {
                break;
            }
        }
        self.ascend();
        Ok(Value::Sequence(items))
    }

    /// Value of a `key:` or `-` whose line ends right after the indicator.
    /// It lives on the following lines when they are indented past
    /// `baseline`; otherwise it is null. A mapping value may also be a block
    /// sequence at the key's own indentation.
    fn parse_nested_block_value(&mut self, baseline: usize, entry: Entry) -> Result<Value> {
        self.cur.skip_whitespace_and_comments();
        if self.cur.is_eof() || self.cur.is_document_marker() {
            return Ok(Value::Null);
        }
        let indent = self.cur.line_indent();
        if indent > baseline {
            return self.parse_value(indent);
        }
        if matches!(entry, Entry::Key) && indent == baseline && self.cur.is_sequence_indicator() {
            return self.parse_value(indent);
        }
        Ok(Value::Null)
    }

    /// Position the cursor on the next sibling entry. Returns `false` when the
    /// collection ends.
    fn next_entry(&mut self, baseline: usize, entry: Entry) -> Result<bool> {
        self.cur.skip_whitespace_and_comments();
        if self.cur.is_eof() || self.cur.is_document_marker() {
            return Ok(false);
        }
        let indent = self.cur.line_indent();
        if indent < baseline {
            return Ok(false);
        }
        if indent > baseline {
            if self.strict {
                return Err(Error::Indentation {
                    line: self.cur.line(),
                    expected: baseline,
                    found: indent,
                });
            }
            warn!(
                "line {}: entry indented {} past baseline {}; ending collection",
                self.cur.line(),
                indent,
                baseline
            );
            return Ok(false);
        }
        Ok(match entry {
            Entry::Key => !self.cur.is_sequence_indicator(),
            Entry::Item => self.cur.is_sequence_indicator(),
        })
    }

    /// Quoted key, or plain text up to a `:` followed by a blank.
    fn parse_block_key(&mut self) -> Result<String> {
        if matches!(self.cur.peek(), Some(b'"' | b'\'')) {
            return Ok(scan_quoted(&mut self.cur)?.into_owned());
        }
        let start = self.cur.pos();
        while let Some(b) = self.cur.peek() {
            if is_break(b) || (b == b':' && is_blank_or_end(self.cur.peek_at(1))) {
                break;
            }
            self.cur.advance();
        }
        Ok(self.cur.slice_from(start).trim_end().to_string())
    }

    /// Value on the same line as its key.
    fn parse_inline_value(&mut self) -> Result<Value> {
        let v = match self.cur.peek() {
            Some(b'{') => self.parse_flow_mapping()?,
            Some(b'[') => self.parse_flow_sequence()?,
            _ => self.parse_block_scalar()?,
        };
        self.finish_line();
        Ok(v)
    }

    /// Quoted string, or a plain scalar running to a comment or line end.
    fn parse_block_scalar(&mut self) -> Result<Value> {
        if matches!(self.cur.peek(), Some(b'"' | b'\'')) {
            return Ok(Value::String(scan_quoted(&mut self.cur)?.into_owned()));
        }
        let start = self.cur.pos();
        let mut end = start;
        while let Some(b) = self.cur.peek() {
            if is_break(b) || (b == b'#' && self.cur.pos() > start && is_blank(self.prev_byte())) {
                break;
            }
            self.cur.advance();
            if !is_blank(b) {
                end = self.cur.pos();
            }
        }
        Ok(interpret(&self.cur.input()[start..end]))
    }

    fn prev_byte(&self) -> u8 {
        self.cur.input().as_bytes()[self.cur.pos() - 1]
    }

    // ---- flow collections --------------------------------------------------

    #[cold]
    fn missing_flow_colon(&self, key: &str) -> Error {
        self.unexpected_byte(&format!("':' after key '{key}'"), "flow mapping")
    }

    #[cold]
    fn unexpected_eof(&self, what: &str, start_line: usize) -> Error {
        Error::syntax(
            self.cur.line(),
            format!("unexpected end of input in {what} starting at line {start_line}"),
        )
    }

    #[cold]
    fn unexpected_byte(&self, expected: &str, what: &str) -> Error {
        Error::syntax(
            self.cur.line(),
            format!(
                "expected {expected} in {what} at offset {}, found '{}'",
                self.cur.pos(),
                self.cur.peek_char().unwrap_or_default().escape_debug()
            ),
        )
    }

    fn parse_flow_mapping(&mut self) -> Result<Value> {
        const WHAT: &str = "flow mapping";
        self.descend()?;
        let start_line = self.cur.line();
        self.cur.advance();
        let mut map = Mapping::new();
        self.cur.skip_whitespace_and_comments();
        if self.cur.peek() == Some(b'}') {
            self.cur.advance();
            self.ascend();
            return Ok(Value::Mapping(map));
        }
        loop {
            self.cur.skip_whitespace_and_comments();
            match self.cur.peek() {
                None => return Err(self.unexpected_eof(WHAT, start_line)),
                Some(b'}') if !map.is_empty() => {
                    self.cur.advance();
                    break;
                }
                _ => {}
            }
            let key = self.parse_flow_key()?;
            self.cur.skip_whitespace_and_comments();
            match self.cur.peek() {
                Some(b':') => self.cur.advance(),
                None => return Err(self.unexpected_eof(WHAT, start_line)),
                Some(_) => return Err(self.missing_flow_colon(&key)),
            }
            let value = self.parse_flow_value()?;
            map.insert(key, value);
            self.cur.skip_whitespace_and_comments();
            match self.cur.peek() {
                Some(b',') => self.cur.advance(),
                Some(b'}') => {
                    self.cur.advance();
                    break;
                }
                None => return Err(self.unexpected_eof(WHAT, start_line)),
                Some(_) => return Err(self.unexpected_byte("',' or '}'", WHAT)),
            }
        }
        self.ascend();
        Ok(Value::Mapping(map))
    }

    fn parse_flow_sequence(&mut self) -> Result<Value> {
        const WHAT: &str = "flow sequence";
        self.descend()?;
        let start_line = self.cur.line();
        self.cur.advance();
        let mut items = Vec::new();
        self.cur.skip_whitespace_and_comments();
        if self.cur.peek() == Some(b']') {
            self.cur.advance();
            self.ascend();
            return Ok(Value::Sequence(items));
        }
        loop {
            self.cur.skip_whitespace_and_comments();
            match self.cur.peek() {
                None => return Err(self.unexpected_eof(WHAT, start_line)),
                Some(b']') if !items.is_empty() => {
                    self.cur.advance();
                    break;
                }
                _ => {}
            }
            items.push(self.parse_flow_value()?);
            self.cur.skip_whitespace_and_comments();
            match self.cur.peek() {
                Some(b',') => self.cur.advance(),
                Some(b']') => {
                    self.cur.advance();
                    break;
                }
                None => return Err(self.unexpected_eof(WHAT, start_line)),
                Some(_) => return Err(self.unexpected_byte("',' or ']'", WHAT)),
            }
        }
        self.ascend();
        Ok(Value::Sequence(items))
    }

    /// Quoted key, or plain text up to `:`, `,`, `}`, `]` or whitespace.
    fn parse_flow_key(&mut self) -> Result<String> {
        if matches!(self.cur.peek(), Some(b'"' | b'\'')) {
            return Ok(scan_quoted(&mut self.cur)?.into_owned());
        }
        let start = self.cur.pos();
        while let Some(b) = self.cur.peek() {
            if matches!(b, b':' | b',' | b'}' | b']') || is_blank(b) || is_break(b) {
                break;
            }
            self.cur.advance();
        }
        Ok(self.cur.slice_from(start).to_string())
    }

    fn parse_flow_value(&mut self) -> Result<Value> {
        self.cur.skip_whitespace_and_comments();
        match self.cur.peek() {
            Some(b'{') => self.parse_flow_mapping(),
            Some(b'[') => self.parse_flow_sequence(),
            Some(b'"' | b'\'') => Ok(Value::String(scan_quoted(&mut self.cur)?.into_owned())),
            _ => Ok(self.parse_flow_scalar()),
        }
    }

    /// Plain scalar ending at `,`, `}`, `]`, a line break, a comment, or a
    /// `:` followed by a blank.
    fn parse_flow_scalar(&mut self) -> Value {
        let start = self.cur.pos();
        let mut end = start;
        while let Some(b) = self.cur.peek() {
            let stop = match b {
                b',' | b'}' | b']' | b'\n' | b'\r' => true,
                b':' => is_blank_or_end(self.cur.peek_at(1)),
                b'#' => self.cur.pos() > start && is_blank(self.prev_byte()),
                _ => false,
            };
            if stop {
                break;
            }
            self.cur.advance();
            if !is_blank(b) {
                end = self.cur.pos();
            }
        }
        interpret(&self.cur.input()[start..end])
    }
}

#[cold]
fn missing_colon(line: usize, key: &str) -> Error {
    Error::syntax(line, format!("expected ':' after key '{key}'"))
}

pub fn parse_to_value(input: &str, options: &Options) -> Result<Value> {
    Parser::with_options(input, options).parse_document()
}

pub fn parse_documents(input: &str, options: &Options) -> Result<Vec<Value>> {
    Parser::with_options(input, options).parse_documents()
}
