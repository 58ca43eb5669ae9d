//! Quoted scalar decoders.
//!
//! Both decoders start with the cursor on the opening quote and leave it just
//! past the closing quote. When the literal needs no rewriting the result
//! borrows straight from the input.

use std::borrow::Cow;

use crate::decode::cursor::Cursor;
use crate::error::{Error, Result};

/// Append the UTF-8 encoding of `code_point`.
///
/// Returns `false` (and appends nothing) for surrogates and values above
/// `U+10FFFF`, which have no UTF-8 form.
pub fn push_code_point(out: &mut String, code_point: u32) -> bool {
    match char::from_u32(code_point) {
        Some(c) => {
            out.push(c);
            true
        }
        None => false,
    }
}

fn hex_value(digits: &[u8]) -> Option<u32> {
    let mut v = 0u32;
    for &d in digits {
        let nibble = (d as char).to_digit(16)?;
        v = (v << 4) | nibble;
    }
    Some(v)
}

#[cfg(feature = "perf_memchr")]
fn find_quote_or_backslash(bytes: &[u8], from: usize) -> Option<usize> {
    memchr::memchr2(b'"', b'\\', &bytes[from..]).map(|rel| from + rel)
}

#[cfg(not(feature = "perf_memchr"))]
fn find_quote_or_backslash(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..]
        .iter()
        .position(|&b| b == b'"' || b == b'\\')
        .map(|rel| from + rel)
}

/// Decode a `"..."` literal.
pub fn scan_double_quoted<'a>(cur: &mut Cursor<'a>) -> Result<Cow<'a, str>> {
    let start_line = cur.line();
    let open = cur.pos();
    let input = cur.input();
    let bytes = input.as_bytes();
    match find_quote_or_backslash(bytes, open + 1) {
        Some(end) if bytes[end] == b'"' => {
            cur.advance_to(end + 1);
            Ok(Cow::Borrowed(&input[open + 1..end]))
        }
        Some(_) => decode_double_quoted(cur).map(Cow::Owned),
        None => Err(Error::Unterminated {
            line: start_line,
            quote: "double",
        }),
    }
}

/// Escape-aware pass over a double-quoted literal.
///
/// Recognized: `\" \\ \/ \b \f \n \r \t \0`, `\xHH`, `\uHHHH` (with
/// surrogate pairs), and `\UHHHHHHHH`. Any other escaped character is kept
/// as-is without its backslash.
fn decode_double_quoted(cur: &mut Cursor<'_>) -> Result<String> {
    let start_line = cur.line();
    let input = cur.input();
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(16);
    let mut i = cur.pos() + 1;
    loop {
        let Some(j) = find_quote_or_backslash(bytes, i) else {
            return Err(Error::Unterminated {
                line: start_line,
                quote: "double",
            });
        };
        out.push_str(&input[i..j]);
        if bytes[j] == b'"' {
            cur.advance_to(j + 1);
            return Ok(out);
        }
        let Some(&esc) = bytes.get(j + 1) else {
            return Err(Error::Unterminated {
                line: start_line,
                quote: "double",
            });
        };
        i = j + 2;
        match esc {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{0008}'),
            b'f' => out.push('\u{000C}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'0' => out.push('\0'),
            b'x' => i += push_hex_escape(&mut out, bytes, i, 2, 'x'),
            b'U' => i += push_hex_escape(&mut out, bytes, i, 8, 'U'),
            b'u' => i += push_unicode_escape(&mut out, bytes, i),
            _ => {
                // Pass the escaped character through, however many bytes it spans.
                let ch = input[j + 1..].chars().next().unwrap_or('\\');
                out.push(ch);
                i = j + 1 + ch.len_utf8();
            }
        }
    }
}

/// Decode `width` hex digits at `at` as one code point. Returns the number of
/// digit bytes consumed; on malformed digits the escape letter is kept.
fn push_hex_escape(out: &mut String, bytes: &[u8], at: usize, width: usize, letter: char) -> usize {
    let Some(digits) = bytes.get(at..at + width) else {
        out.push(letter);
        return 0;
    };
    match hex_value(digits) {
        Some(cp) if push_code_point(out, cp) => width,
        Some(_) => {
            out.push(char::REPLACEMENT_CHARACTER);
            width
        }
        None => {
            out.push(letter);
            0
        }
    }
}

fn push_unicode_escape(out: &mut String, bytes: &[u8], at: usize) -> usize {
    let Some(cp) = bytes.get(at..at + 4).and_then(hex_value) else {
        out.push('u');
        return 0;
    };
    if (0xD800..0xDC00).contains(&cp) {
        // High surrogate: pair it with an immediately following `\uDC00`-`\uDFFF`.
        if bytes.get(at + 4..at + 6) == Some(b"\\u".as_slice()) {
            if let Some(low) = bytes.get(at + 6..at + 10).and_then(hex_value) {
                if (0xDC00..0xE000).contains(&low) {
                    let combined = 0x10000 + ((cp - 0xD800) << 10) + (low - 0xDC00);
                    push_code_point(out, combined);
                    return 10;
                }
            }
        }
        out.push(char::REPLACEMENT_CHARACTER);
        return 4;
    }
    if !push_code_point(out, cp) {
        out.push(char::REPLACEMENT_CHARACTER);
    }
    4
}

/// Decode a `'...'` literal. `''` is the only escape; line breaks are kept.
pub fn scan_single_quoted<'a>(cur: &mut Cursor<'a>) -> Result<Cow<'a, str>> {
    let start_line = cur.line();
    let input = cur.input();
    let bytes = input.as_bytes();
    let body_start = cur.pos() + 1;
    let mut i = body_start;
    let mut owned: Option<String> = None;
    let mut run_start = body_start;
    loop {
        let Some(rel) = bytes[i..].iter().position(|&b| b == b'\'') else {
            return Err(Error::Unterminated {
                line: start_line,
                quote: "single",
            });
        };
        let q = i + rel;
        if bytes.get(q + 1) == Some(&b'\'') {
            let buf = owned.get_or_insert_with(String::new);
            buf.push_str(&input[run_start..q]);
            buf.push('\'');
            i = q + 2;
            run_start = i;
            continue;
        }
        cur.advance_to(q + 1);
        return Ok(match owned {
            Some(mut buf) => {
                buf.push_str(&input[run_start..q]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(&input[body_start..q]),
        });
    }
}

/// Dispatch on the quote byte under the cursor.
pub fn scan_quoted<'a>(cur: &mut Cursor<'a>) -> Result<Cow<'a, str>> {
    match cur.peek() {
        Some(b'\'') => scan_single_quoted(cur),
        _ => scan_double_quoted(cur),
    }
}
