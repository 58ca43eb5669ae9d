//! Conversions between [`Value`] and `serde_json::Value`.

use crate::value::{Mapping, Value};

/// Convert into JSON. Non-finite floats have no JSON number form and become
/// their YAML spellings (`.inf`, `-.inf`, `.nan`) as strings.
pub fn to_json_value(v: Value) -> serde_json::Value {
    match v {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(b),
        Value::Int(i) => serde_json::Value::Number(i.into()),
        Value::Float(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or_else(|| serde_json::Value::String(crate::number::format_f64(f))),
        Value::String(s) => serde_json::Value::String(s),
        Value::Sequence(a) => serde_json::Value::Array(a.into_iter().map(to_json_value).collect()),
        Value::Mapping(pairs) => {
            let mut m = serde_json::Map::new();
            for (k, vv) in pairs {
                m.insert(k, to_json_value(vv));
            }
            serde_json::Value::Object(m)
        }
    }
}

/// Convert from JSON. Integers outside `i64` become floats.
pub fn from_json_value(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(a) => {
            Value::Sequence(a.into_iter().map(from_json_value).collect())
        }
        serde_json::Value::Object(obj) => Value::Mapping(
            obj.into_iter()
                .map(|(k, vv)| (k, from_json_value(vv)))
                .collect::<Mapping>(),
        ),
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        to_json_value(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        from_json_value(v)
    }
}
