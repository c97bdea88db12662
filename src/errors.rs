//!
//! Common Errors.
//!
use std::fmt;

#[derive(Debug)]
pub enum KishuError {
    /// A corpus source could not be opened or read.
    CorpusSource(String),
    /// An allow-list pattern failed to compile.
    InvalidPattern(String),
}

impl fmt::Display for KishuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            KishuError::CorpusSource(ref err) => fmt::Display::fmt(err, f),
            KishuError::InvalidPattern(ref err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for KishuError {}

impl From<std::io::Error> for KishuError {
    fn from(err: std::io::Error) -> Self {
        KishuError::CorpusSource(err.to_string())
    }
}

impl From<regex::Error> for KishuError {
    fn from(err: regex::Error) -> Self {
        KishuError::InvalidPattern(err.to_string())
    }
}
