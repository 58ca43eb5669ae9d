//! Decoding pipeline: cursor, scalar inference, quoted strings, and the
//! recursive-descent parser that ties them together.

pub mod cursor;
pub mod parser;
pub mod scalar;
pub mod strings;
