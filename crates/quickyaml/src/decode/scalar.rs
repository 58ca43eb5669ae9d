//! Plain-scalar type inference.
//!
//! [`interpret`] is total: a span that matches no typed grammar is returned
//! as a string, never as an error.

use crate::number::parse_radix_i64;
use crate::value::Value;

const NULLS: [&str; 4] = ["null", "Null", "NULL", "~"];
const TRUES: [&str; 9] = ["true", "True", "TRUE", "yes", "Yes", "YES", "on", "On", "ON"];
const FALSES: [&str; 9] = [
    "false", "False", "FALSE", "no", "No", "NO", "off", "Off", "OFF",
];

pub fn is_null_literal(s: &str) -> bool {
    NULLS.contains(&s)
}

pub fn bool_literal(s: &str) -> Option<bool> {
    if TRUES.contains(&s) {
        Some(true)
    } else if FALSES.contains(&s) {
        Some(false)
    } else {
        None
    }
}

/// Classify an already-trimmed plain scalar. First match wins:
/// null, bool, decimal int, `0x` hex, `0o` octal, float, special float,
/// and finally the text itself.
pub fn interpret(span: &str) -> Value {
    if span.is_empty() || is_null_literal(span) {
        return Value::Null;
    }
    if let Some(b) = bool_literal(span) {
        return Value::Bool(b);
    }
    if let Ok(i) = span.parse::<i64>() {
        return Value::Int(i);
    }
    if let Some(i) = prefixed_int(span) {
        return Value::Int(i);
    }
    if let Some(f) = parse_float(span) {
        return Value::Float(f);
    }
    if let Some(f) = special_float(span) {
        return Value::Float(f);
    }
    Value::String(span.to_string())
}

fn prefixed_int(s: &str) -> Option<i64> {
    if let Some(body) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return parse_radix_i64(body, 16);
    }
    if let Some(body) = s.strip_prefix("0o").or_else(|| s.strip_prefix("0O")) {
        return parse_radix_i64(body, 8);
    }
    None
}

// `str::parse::<f64>` also accepts words such as `inf` and `NaN`; those stay
// strings here, so the span must look numeric before it is handed over.
fn parse_float(s: &str) -> Option<f64> {
    let b = s.as_bytes();
    let first = *b.first()?;
    if !(first.is_ascii_digit() || matches!(first, b'-' | b'+' | b'.')) {
        return None;
    }
    if !b.iter().any(|c| c.is_ascii_digit()) {
        return None;
    }
    if b.iter()
        .any(|&c| !(c.is_ascii_digit() || matches!(c, b'-' | b'+' | b'.' | b'e' | b'E')))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

fn special_float(s: &str) -> Option<f64> {
    match s {
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => Some(f64::INFINITY),
        "-.inf" | "-.Inf" | "-.INF" => Some(f64::NEG_INFINITY),
        ".nan" | ".NaN" | ".NAN" => Some(f64::NAN),
        _ => None,
    }
}
