use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::record::RecordError;

/// Coarse classification of every failure the counter can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad file suffix, malformed record, unparseable timestamp or target date.
    Format,
    /// The log file does not exist or cannot be opened.
    NotFound,
    /// The target date was not given as text.
    TypeMismatch,
    /// Reading an already opened file failed.
    Io,
}

#[derive(Debug, Error)]
pub enum CookieError {
    #[error("file must have a '.csv' extension: {}", .0.display())]
    InvalidExtension(PathBuf),

    #[error("file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("cannot open {}: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("invalid date format '{0}', please provide the date as YYYY-MM-DD")]
    InvalidDate(String),

    #[error("expected the date as a YYYY-MM-DD string, got {0}")]
    DateNotText(&'static str),

    #[error("malformed record on line {line}: {source}")]
    MalformedRecord { line: usize, source: RecordError },

    #[error("failed reading line {line}: {source}")]
    Read { line: usize, source: io::Error },
}

impl CookieError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CookieError::InvalidExtension(_)
            | CookieError::InvalidDate(_)
            | CookieError::MalformedRecord { .. } => ErrorKind::Format,
            CookieError::FileNotFound(_) | CookieError::Unreadable { .. } => ErrorKind::NotFound,
            CookieError::DateNotText(_) => ErrorKind::TypeMismatch,
            CookieError::Read { .. } => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, CookieError>;
