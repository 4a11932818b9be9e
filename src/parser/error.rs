use thiserror::Error;

/// Error in a recognised `traceInfo.js` statement. Lines are 1-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraceParseError {
    #[error("line {line}: unterminated string literal")]
    UnterminatedString { line: usize },

    #[error("line {line}: invalid escape sequence '\\{found}'")]
    BadEscape { line: usize, found: char },

    #[error("line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        line: usize,
        expected: &'static str,
        found: String,
    },
}

impl TraceParseError {
    pub fn line(&self) -> usize {
        match self {
            TraceParseError::UnterminatedString { line }
            | TraceParseError::BadEscape { line, .. }
            | TraceParseError::UnexpectedToken { line, .. } => *line,
        }
    }
}
