//! Block-style YAML encoding of [`Value`] trees.
//!
//! The output is meant to be read back by this crate's own parser: integers
//! and floats keep distinct spellings, and any string the scalar interpreter
//! would retype is double-quoted.

pub mod encoders;
pub mod primitives;
pub mod writer;

use crate::options::Options;
use crate::value::Value;

pub fn encode_value_to_string(value: &Value, options: &Options) -> String {
    let mut w = writer::LineWriter::new();
    encoders::encode_value(value, &mut w, options, 0);
    w.into_string()
}
