#![cfg(feature = "serde")]

use std::collections::BTreeMap;

use quickyaml::{Error, Options, from_slice, from_str, to_string};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
enum Mode {
    Fast,
    Safe,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
enum Shape {
    Circle { r: f64 },
    Square(u32),
    Line(i32, i32),
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Limits {
    cpu: u8,
    memory: u64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Service {
    name: String,
    port: u16,
    ratio: f64,
    tags: Vec<String>,
    limits: Limits,
    owner: Option<String>,
    mode: Mode,
    shapes: Vec<Shape>,
    labels: BTreeMap<String, i64>,
}

fn sample() -> Service {
    Service {
        name: "api: gateway".into(),
        port: 8080,
        ratio: 2.0,
        tags: vec!["edge".into(), "true".into(), "".into()],
        limits: Limits {
            cpu: 4,
            memory: 1 << 33,
        },
        owner: None,
        mode: Mode::Safe,
        shapes: vec![
            Shape::Circle { r: 1.5 },
            Shape::Square(3),
            Shape::Line(-1, 1),
        ],
        labels: [("a".to_string(), 1), ("b".to_string(), -2)].into_iter().collect(),
    }
}

#[test]
fn struct_roundtrips_through_text() -> Result<(), Box<dyn std::error::Error>> {
    let svc = sample();
    let text = to_string(&svc, &Options::default())?;
    let back: Service = from_str(&text, &Options::default())?;
    assert_eq!(back, svc);
    Ok(())
}

#[test]
fn enums_are_externally_tagged() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(to_string(&Mode::Fast, &Options::default())?, "Fast\n");
    assert_eq!(
        to_string(&Shape::Circle { r: 1.5 }, &Options::default())?,
        "Circle:\n  r: 1.5\n"
    );
    assert_eq!(to_string(&Shape::Square(2), &Options::default())?, "Square: 2\n");
    Ok(())
}

#[test]
fn hand_written_document_deserializes() -> Result<(), Box<dyn std::error::Error>> {
    let src = b"\
name: web
port: 443
ratio: 1
tags: [a, b]
limits: {cpu: 2, memory: 0x100}
mode: Fast
shapes:
  - Square: 9
  - Line: [0, 5]
  - Circle: {r: .5}
labels: {}
";
    let svc: Service = from_slice(src, &Options::default())?;
    assert_eq!(svc.name, "web");
    assert_eq!(svc.ratio, 1.0);
    assert_eq!(svc.limits.memory, 256);
    assert_eq!(svc.owner, None);
    assert_eq!(svc.mode, Mode::Fast);
    assert_eq!(
        svc.shapes,
        vec![Shape::Square(9), Shape::Line(0, 5), Shape::Circle { r: 0.5 }]
    );
    assert!(svc.labels.is_empty());
    Ok(())
}

#[test]
fn type_mismatch_is_reported() {
    let err = from_str::<Limits>("cpu: many\nmemory: 1\n", &Options::default()).unwrap_err();
    assert!(matches!(err, Error::Message(_)));
    assert!(err.to_string().contains("invalid type"), "{err}");
}

#[test]
fn out_of_range_integer_is_rejected() {
    let res = from_str::<Limits>("cpu: 300\nmemory: 1\n", &Options::default());
    assert!(res.is_err());
}

#[test]
fn parse_errors_pass_through() {
    let err = from_str::<Limits>("cpu: [1\n", &Options::default()).unwrap_err();
    assert!(matches!(err.root_cause(), Error::Syntax { .. }));
}

#[test]
fn non_scalar_map_keys_are_rejected() {
    let mut m = BTreeMap::new();
    m.insert(vec![1u8], 1);
    let err = to_string(&m, &Options::default()).unwrap_err();
    assert!(err.to_string().contains("mapping keys must be scalars"));
}

#[test]
fn large_unsigned_becomes_float() -> Result<(), Box<dyn std::error::Error>> {
    let v = quickyaml::ser::to_value(&u64::MAX)?;
    assert!(matches!(v, quickyaml::Value::Float(_)));
    Ok(())
}
