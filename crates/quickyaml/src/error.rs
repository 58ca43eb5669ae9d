use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] core::str::Utf8Error),

    #[error("syntax at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("unterminated {quote}-quoted string starting at line {line}")]
    Unterminated { line: usize, quote: &'static str },

    #[error("nesting deeper than {limit} levels at line {line}")]
    DepthLimit { line: usize, limit: usize },

    #[error("indentation at line {line}: expected {expected} columns, found {found}")]
    Indentation {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("in key '{key}': {source}")]
    InKey {
        key: String,
        #[source]
        source: Box<Error>,
    },

    #[error("in item {index}: {source}")]
    InIndex {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn in_key(key: &str, source: Error) -> Self {
        Error::InKey {
            key: key.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn in_index(index: usize, source: Error) -> Self {
        Error::InIndex {
            index,
            source: Box::new(source),
        }
    }

    /// 1-based line of the innermost fault, when the error carries one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Syntax { line, .. }
            | Error::Unterminated { line, .. }
            | Error::DepthLimit { line, .. }
            | Error::Indentation { line, .. } => Some(*line),
            Error::InKey { source, .. } | Error::InIndex { source, .. } => source.line(),
            _ => None,
        }
    }

    /// Strips the key/index context wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::InKey { source, .. } | Error::InIndex { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
