use quickyaml::encode::encode_value_to_string;
use quickyaml::encode::primitives::{format_key, format_string, needs_quotes};
use quickyaml::{Mapping, Options, Value};

fn map(entries: Vec<(&str, Value)>) -> Value {
    Value::Mapping(entries.into_iter().collect())
}

fn enc(v: &Value) -> String {
    encode_value_to_string(v, &Options::default())
}

#[test]
fn scalars() {
    assert_eq!(enc(&Value::Null), "null\n");
    assert_eq!(enc(&Value::Bool(true)), "true\n");
    assert_eq!(enc(&Value::Int(-7)), "-7\n");
    assert_eq!(enc(&Value::Float(2.0)), "2.0\n");
    assert_eq!(enc(&Value::Float(f64::NEG_INFINITY)), "-.inf\n");
    assert_eq!(enc(&Value::from("plain text")), "plain text\n");
}

#[test]
fn block_mapping_and_sequence() {
    let v = map(vec![
        ("name", Value::from("demo")),
        ("tags", Value::Sequence(vec![Value::from("a"), Value::Int(1)])),
        ("nested", map(vec![("x", Value::Float(0.5))])),
    ]);
    assert_eq!(
        enc(&v),
        "name: demo\ntags:\n  - a\n  - 1\nnested:\n  x: 0.5\n"
    );
}

#[test]
fn nested_items_open_their_own_block() {
    let v = Value::Sequence(vec![
        map(vec![("k", Value::Int(1)), ("j", Value::Int(2))]),
        Value::Sequence(vec![Value::Null]),
    ]);
    assert_eq!(enc(&v), "-\n  k: 1\n  j: 2\n-\n  - null\n");
}

#[test]
fn empty_collections_stay_inline() {
    let v = map(vec![
        ("list", Value::Sequence(vec![])),
        ("obj", Value::Mapping(Mapping::new())),
    ]);
    assert_eq!(enc(&v), "list: []\nobj: {}\n");
}

#[test]
fn indent_option_controls_step() {
    let v = map(vec![("a", map(vec![("b", Value::Int(1))]))]);
    let out = encode_value_to_string(&v, &Options::default().with_indent(4));
    assert_eq!(out, "a:\n    b: 1\n");
    let out = encode_value_to_string(&v, &Options::default().with_indent(0));
    assert_eq!(out, "a:\n b: 1\n");
}

#[test]
fn strings_that_would_retype_are_quoted() {
    for s in ["", "true", "no", "null", "~", "42", "4.5", "0x1F", ".inf", "1e3"] {
        assert!(needs_quotes(s), "{s:?}");
        assert_eq!(format_string(s), format!("\"{s}\""));
    }
}

#[test]
fn layout_breaking_strings_are_quoted() {
    for s in [
        "- item", "key: value", "a #b", "[x]", "{y}", "'q'", " lead", "trail ", "end:", "...",
        "line\nbreak", "tab\there",
    ] {
        assert!(needs_quotes(s), "{s:?}");
    }
    assert_eq!(format_string("line\nbreak"), r#""line\nbreak""#);
    assert_eq!(format_string("say \"hi\""), r#"say "hi""#);
    assert_eq!(format_string("\"hi\""), r#""\"hi\"""#);
    assert_eq!(format_string("\u{1}"), r#""\x01""#);
}

#[test]
fn safe_strings_stay_plain() {
    for s in ["hello", "hello world", "a:b", "a#b", "C:\\path", "ünïcödé", "1.2.3", "inf"] {
        assert!(!needs_quotes(s), "{s:?}");
    }
}

#[test]
fn keys_quote_only_when_layout_demands() {
    assert_eq!(format_key("true"), "true");
    assert_eq!(format_key("42"), "42");
    assert_eq!(format_key("a b"), "a b");
    assert_eq!(format_key("a: b"), "\"a: b\"");
    assert_eq!(format_key("a:b"), "\"a:b\"");
    assert_eq!(format_key(""), "\"\"");
    assert_eq!(format_key("-x"), "\"-x\"");
}

#[test]
fn writer_api_matches_string_api() -> Result<(), Box<dyn std::error::Error>> {
    let v = map(vec![("a", Value::Int(1))]);
    let mut buf = Vec::new();
    quickyaml::encode_to_writer(&mut buf, &v, &Options::default())?;
    assert_eq!(String::from_utf8(buf)?, enc(&v));
    Ok(())
}
