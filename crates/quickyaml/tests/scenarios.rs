use quickyaml::{Mapping, Value, parse, parse_str};
use test_log::test;

fn s(v: &str) -> Value {
    Value::String(v.to_string())
}

#[test]
fn flow_mapping_with_typed_values() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse(b"{name: Alice, age: 30}")?;
    let expected: Mapping = [("name", s("Alice")), ("age", Value::Int(30))]
        .into_iter()
        .collect();
    assert_eq!(v, Value::Mapping(expected));
    Ok(())
}

#[test]
fn double_quoted_newline_escape() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse(br#""hello\nworld""#)?, s("hello\nworld"));
    Ok(())
}

#[test]
fn single_quoted_doubled_quotes() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse(b"'can''t won''t'")?, s("can't won't"));
    Ok(())
}

#[test]
fn mixed_flow_sequence() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse(br#"[1, "two", true, 4.5]"#)?;
    assert_eq!(
        v,
        Value::Sequence(vec![
            Value::Int(1),
            s("two"),
            Value::Bool(true),
            Value::Float(4.5)
        ])
    );
    Ok(())
}

#[test]
fn blank_lines_between_items() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse(b"- a\n\n- b\n\n- c")?;
    assert_eq!(v, Value::Sequence(vec![s("a"), s("b"), s("c")]));
    Ok(())
}

#[test]
fn unicode_escape_decodes_to_utf8() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse(br#""\u2764""#)?;
    assert_eq!(v, s("\u{2764}"));
    assert_eq!(v.as_str().map(str::len), Some(3));
    Ok(())
}

#[test]
fn empty_inputs() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse(b"")?, Value::Null);
    assert_eq!(parse(b"   \n\n")?, Value::Null);
    assert_eq!(parse(b"# only a comment\n")?, Value::Null);
    assert_eq!(parse(b"{}")?, Value::Mapping(Mapping::new()));
    assert_eq!(parse(b"[]")?, Value::Sequence(Vec::new()));
    Ok(())
}

#[test]
fn top_level_scalars() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_str("42")?, Value::Int(42));
    assert_eq!(parse_str("  -1.5  ")?, Value::Float(-1.5));
    assert_eq!(parse_str("~")?, Value::Null);
    assert_eq!(parse_str("off")?, Value::Bool(false));
    assert_eq!(parse_str("just some words")?, s("just some words"));
    Ok(())
}

#[test]
fn byte_order_mark_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse("\u{FEFF}a: 1\n".as_bytes())?;
    assert_eq!(v["a"], Value::Int(1));
    Ok(())
}

#[test]
fn document_marker_prefix() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse_str("--- # header\nkey: value\n...\n")?;
    assert_eq!(v["key"], s("value"));
    assert_eq!(parse_str("---\n")?, Value::Null);
    Ok(())
}

#[test]
fn config_style_document() -> Result<(), Box<dyn std::error::Error>> {
    let src = "\
# service configuration
service:
  name: \"api gateway\"
  replicas: 3
  ratio: 0.75
  debug: off
  endpoints:
    - path: /users
      methods: [GET, POST]
    - path: /health
      methods: [GET]
  limits: {cpu: 0x10, memory: 0o777, burst: .inf}
owner: ~
";
    let v = parse_str(src)?;
    let svc = &v["service"];
    assert_eq!(svc["name"], s("api gateway"));
    assert_eq!(svc["replicas"], Value::Int(3));
    assert_eq!(svc["ratio"], Value::Float(0.75));
    assert_eq!(svc["debug"], Value::Bool(false));
    assert_eq!(svc["endpoints"][0]["path"], s("/users"));
    assert_eq!(svc["endpoints"][0]["methods"][1], s("POST"));
    assert_eq!(svc["endpoints"][1]["methods"], Value::Sequence(vec![s("GET")]));
    assert_eq!(svc["limits"]["cpu"], Value::Int(16));
    assert_eq!(svc["limits"]["memory"], Value::Int(511));
    assert_eq!(svc["limits"]["burst"], Value::Float(f64::INFINITY));
    assert_eq!(v["owner"], Value::Null);
    assert!(v.as_mapping().is_some_and(|m| m.contains_key("owner")));
    Ok(())
}

#[test]
fn missing_lookups_yield_null() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse_str("a: [1]")?;
    assert!(v["nope"].is_null());
    assert!(v["a"][7].is_null());
    assert!(v["a"]["x"].is_null());
    assert_eq!(v.get("a").and_then(|a| a[0].as_i64()), Some(1));
    Ok(())
}
