use std::error::Error;
use std::fmt;

/// The two failure classes a grading call can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input has the wrong shape or type: NaN, non-numeric field, non-array argument.
    Type,

    /// Input is well formed but outside its domain.
    Range,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Type => write!(f, "TypeError"),
            ErrorKind::Range => write!(f, "RangeError"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeError {
    pub kind: ErrorKind,
    pub message: String,
}

impl GradeError {
    pub fn type_error(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Type,
            message: message.into(),
        }
    }

    pub fn range_error(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Range,
            message: message.into(),
        }
    }

    pub fn is_type_error(&self) -> bool {
        self.kind == ErrorKind::Type
    }

    pub fn is_range_error(&self) -> bool {
        self.kind == ErrorKind::Range
    }
}

impl fmt::Display for GradeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for GradeError {}
