//! Serde encoding helpers for YAML

use serde::Serialize;

use crate::value::Value;
use crate::{Result, error::Error, options::Options};

mod value_builder;

pub use value_builder::BuildError;

/// Build a [`Value`] from any `Serialize` type.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value_builder::to_value(value).map_err(|e| Error::Message(e.msg))
}

pub fn to_string<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<String> {
    let v = to_value(value)?;
    Ok(crate::encode::encode_value_to_string(&v, options))
}

pub fn to_writer<W: std::io::Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
    options: &Options,
) -> Result<()> {
    let s = to_string(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
