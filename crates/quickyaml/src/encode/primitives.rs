use std::fmt::Write as _;

use crate::decode::scalar::interpret;
use crate::number::format_f64;
use crate::value::Value;

/// Bytes that carry meaning at the start of a plain scalar.
const INDICATORS: &[u8] = b"-?:,[]{}#&*!|>'\"%@`";

/// Stripped by the parser when it leads the input.
const BOM: char = '\u{FEFF}';

fn is_control(c: char) -> bool {
    let u = c as u32;
    u < 0x20 || u == 0x7F
}

/// True when `s` written plain would not read back as the same string.
pub fn needs_quotes(s: &str) -> bool {
    let Some(&first) = s.as_bytes().first() else {
        return true;
    };
    if first == b' ' || first == b'\t' || INDICATORS.contains(&first) {
        return true;
    }
    if s.ends_with([' ', '\t', ':']) || s.starts_with("...") || s.starts_with(BOM) {
        return true;
    }
    if s.contains(": ") || s.contains(":\t") || s.contains(" #") || s.contains("\t#") {
        return true;
    }
    if s.chars().any(is_control) {
        return true;
    }
    // Literals that would come back as null, bool, or a number.
    !matches!(interpret(s), Value::String(_))
}

/// Keys are never type-inferred, so only layout-breaking text needs quotes.
pub fn key_needs_quotes(s: &str) -> bool {
    let Some(&first) = s.as_bytes().first() else {
        return true;
    };
    if first == b' ' || first == b'\t' || INDICATORS.contains(&first) {
        return true;
    }
    s.ends_with([' ', '\t'])
        || s.starts_with("...")
        || s.starts_with(BOM)
        || s.contains(':')
        || s.contains(" #")
        || s.contains("\t#")
        || s.chars().any(is_control)
}

pub fn escape_and_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    escape_and_quote_into(&mut out, s);
    out
}

pub fn escape_and_quote_into(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if is_control(c) => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

pub fn format_string(s: &str) -> String {
    if needs_quotes(s) {
        escape_and_quote(s)
    } else {
        s.to_string()
    }
}

pub fn format_key(s: &str) -> String {
    if key_needs_quotes(s) {
        escape_and_quote(s)
    } else {
        s.to_string()
    }
}

pub fn format_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

pub fn format_null() -> &'static str {
    "null"
}

/// Single-line form of a scalar or empty collection; `None` for a
/// collection that needs its own block.
pub fn format_inline(value: &Value) -> Option<String> {
    Some(match value {
        Value::Null => format_null().to_string(),
        Value::Bool(b) => format_bool(*b).to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_f64(*f),
        Value::String(s) => format_string(s),
        Value::Sequence(items) if items.is_empty() => "[]".to_string(),
        Value::Mapping(m) if m.is_empty() => "{}".to_string(),
        Value::Sequence(_) | Value::Mapping(_) => return None,
    })
}
