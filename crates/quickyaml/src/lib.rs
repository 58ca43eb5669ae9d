#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod value;

mod number;

#[cfg(feature = "serde")]
pub mod de;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "serde")]
pub mod ser;

pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::value::{Mapping, Value};

use std::io::{Read, Write};

#[cfg(feature = "serde")]
use serde::{Serialize, de::DeserializeOwned};

/// Parse one YAML document from bytes. Content after the first complete
/// value is ignored.
pub fn parse(input: &[u8]) -> Result<Value> {
    parse_with_options(input, &Options::default())
}

pub fn parse_with_options(input: &[u8], options: &Options) -> Result<Value> {
    let s = core::str::from_utf8(input)?;
    crate::decode::parser::parse_to_value(s, options)
}

pub fn parse_str(input: &str) -> Result<Value> {
    crate::decode::parser::parse_to_value(input, &Options::default())
}

/// Parse every `---`-separated document in the stream.
pub fn parse_documents(input: &[u8], options: &Options) -> Result<Vec<Value>> {
    let s = core::str::from_utf8(input)?;
    crate::decode::parser::parse_documents(s, options)
}

/// Buffer the whole reader, then parse.
pub fn decode_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Value> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse_with_options(&buf, options)
}

pub fn encode_to_writer<W: Write>(mut writer: W, value: &Value, options: &Options) -> Result<()> {
    let s = crate::encode::encode_value_to_string(value, options);
    writer.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(feature = "serde")]
pub fn from_str<T: DeserializeOwned>(s: &str, options: &Options) -> Result<T> {
    crate::de::from_str(s, options)
}

#[cfg(feature = "serde")]
pub fn from_slice<T: DeserializeOwned>(input: &[u8], options: &Options) -> Result<T> {
    let s = core::str::from_utf8(input)?;
    crate::de::from_str(s, options)
}

#[cfg(feature = "serde")]
pub fn to_string<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<String> {
    crate::ser::to_string(value, options)
}

#[cfg(feature = "serde")]
pub fn to_writer<W: Write, T: Serialize + ?Sized>(writer: W, value: &T, options: &Options) -> Result<()> {
    crate::ser::to_writer(writer, value, options)
}
