//! serde::Deserializer implementation backed by a parsed [`Value`]

use serde::de::{
    self, DeserializeOwned, EnumAccess, IntoDeserializer, MapAccess, SeqAccess, VariantAccess,
};

use crate::value::{Mapping, Value};
use crate::{Result, error::Error, options::Options};

#[derive(Debug)]
pub struct DeError {
    msg: String,
}

impl core::fmt::Display for DeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.msg)
    }
}
impl de::Error for DeError {
    fn custom<T: core::fmt::Display>(t: T) -> Self {
        DeError { msg: t.to_string() }
    }
}
impl core::error::Error for DeError {}

pub struct Deserializer {
    value: Value,
}

impl Deserializer {
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }
}

struct SeqDe {
    elems: std::vec::IntoIter<Value>,
}

impl<'de> SeqAccess<'de> for SeqDe {
    type Error = DeError;

    fn next_element_seed<T>(&mut self, seed: T) -> core::result::Result<Option<T::Value>, DeError>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.elems.next() {
            Some(v) => seed.deserialize(Deserializer { value: v }).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.elems.len())
    }
}

struct MapDe {
    entries: <Mapping as IntoIterator>::IntoIter,
    next_val: Option<Value>,
}

impl MapDe {
    fn new(map: Mapping) -> Self {
        Self {
            entries: map.into_iter(),
            next_val: None,
        }
    }
}

impl<'de> MapAccess<'de> for MapDe {
    type Error = DeError;

    fn next_key_seed<K>(&mut self, seed: K) -> core::result::Result<Option<K::Value>, DeError>
    where
        K: de::DeserializeSeed<'de>,
    {
        let Some((key, val)) = self.entries.next() else {
            return Ok(None);
        };
        self.next_val = Some(val);
        seed.deserialize(key.into_deserializer()).map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> core::result::Result<V::Value, DeError>
    where
        V: de::DeserializeSeed<'de>,
    {
        let v = self.next_val.take().unwrap_or(Value::Null);
        seed.deserialize(Deserializer { value: v })
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}

/// Externally tagged enum: `Variant` or `{Variant: content}`.
struct EnumDe {
    variant: String,
    content: Option<Value>,
}

impl<'de> EnumAccess<'de> for EnumDe {
    type Error = DeError;
    type Variant = Self;

    fn variant_seed<V>(self, seed: V) -> core::result::Result<(V::Value, Self), DeError>
    where
        V: de::DeserializeSeed<'de>,
    {
        let de: de::value::StringDeserializer<DeError> = self.variant.clone().into_deserializer();
        let tag = seed.deserialize(de)?;
        Ok((tag, self))
    }
}

impl<'de> VariantAccess<'de> for EnumDe {
    type Error = DeError;

    fn unit_variant(self) -> core::result::Result<(), DeError> {
        match self.content {
            None | Some(Value::Null) => Ok(()),
            Some(other) => Err(de::Error::custom(format!(
                "unit variant '{}' cannot carry a {}",
                self.variant,
                other.type_name()
            ))),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> core::result::Result<T::Value, DeError>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(Deserializer {
            value: self.content.unwrap_or(Value::Null),
        })
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> core::result::Result<V::Value, DeError>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_seq(
            Deserializer {
                value: self.content.unwrap_or(Value::Null),
            },
            visitor,
        )
    }

    fn struct_variant<V>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> core::result::Result<V::Value, DeError>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_map(
            Deserializer {
                value: self.content.unwrap_or(Value::Null),
            },
            visitor,
        )
    }
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = DeError;

    fn deserialize_any<V>(self, visitor: V) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Int(i) => visitor.visit_i64(i),
            Value::Float(f) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Sequence(items) => visitor.visit_seq(SeqDe {
                elems: items.into_iter(),
            }),
            Value::Mapping(map) => visitor.visit_map(MapDe::new(map)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(variant) => visitor.visit_enum(EnumDe {
                variant,
                content: None,
            }),
            Value::Mapping(map) if map.len() == 1 => {
                let Some((variant, content)) = map.into_iter().next() else {
                    return Err(de::Error::custom("empty enum mapping"));
                };
                visitor.visit_enum(EnumDe {
                    variant,
                    content: Some(content),
                })
            }
            other => Err(de::Error::custom(format!(
                "expected an enum variant name or single-key mapping, found {}",
                other.type_name()
            ))),
        }
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> core::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 char str string bytes byte_buf
        unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    T::deserialize(Deserializer::from_value(value)).map_err(|e: DeError| Error::Message(e.msg))
}

pub fn from_str<T: DeserializeOwned>(s: &str, options: &Options) -> Result<T> {
    let v = crate::decode::parser::parse_to_value(s, options)?;
    from_value(v)
}
