use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("error opening file {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no valid processes were loaded from {}", path.display())]
    NoValidRecords { path: PathBuf },
}

/// Why a single input line was rejected. The line itself is skipped and
/// loading continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("missing {field}")]
    MissingField { field: &'static str },
    #[error("invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },
    #[error("{field} out of range: {value:?}")]
    OutOfRange { field: &'static str, value: String },
}

impl LineError {
    pub fn field(&self) -> &'static str {
        match self {
            LineError::MissingField { field }
            | LineError::InvalidField { field, .. }
            | LineError::OutOfRange { field, .. } => field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid operation: {symbol:?}")]
    UnknownOperation { symbol: String },
}
