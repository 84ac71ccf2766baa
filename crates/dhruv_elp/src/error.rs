//! Error types for term-table parsing and series evaluation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from reading term tables or configuring the evaluator.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ElpError {
    /// Term-table text could not be parsed (1-based line number).
    Parse { line: usize, msg: String },
    /// Series configuration is out of range.
    InvalidConfig(&'static str),
    /// I/O error.
    Io(String),
}

impl Display for ElpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { line, msg } => write!(f, "parse error at line {line}: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for ElpError {}

impl From<std::io::Error> for ElpError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse_error() {
        let e = ElpError::Parse {
            line: 7,
            msg: "expected 14 fields, got 3".into(),
        };
        assert_eq!(e.to_string(), "parse error at line 7: expected 14 fields, got 3");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: ElpError = io.into();
        assert!(matches!(e, ElpError::Io(_)));
    }
}
