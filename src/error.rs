// Error taxonomy shared by every repository and program
//
// Repository validation errors are recoverable: the program runners print
// them and move on. File errors abort the read or write that raised them.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for library operations
pub type RecordResult<T> = Result<T, RecordError>;

#[derive(Error, Debug)]
pub enum RecordError {
    /// An entity with the same identifier is already stored
    #[error("{kind} with ID {id} already exists.")]
    DuplicateKey { kind: &'static str, id: String },

    /// No entity carries the requested identifier
    ///
    /// `context` names the attempted operation (" for removal"), or is empty.
    #[error("{kind} with ID {id} not found{context}.")]
    NotFound {
        kind: &'static str,
        id: String,
        context: &'static str,
    },

    /// A value failed a domain rule (negative quantity, non-numeric input)
    #[error("Invalid {field} `{value}`: {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// A line of a delimited text file could not be turned into a record
    #[error("Line {line}: {reason}")]
    MalformedRecord { line: u64, reason: MalformedReason },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file exists but does not decode as the expected entities
    #[error("Snapshot {} is not readable: {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RecordError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RecordError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for a file that does not exist, as opposed to one that can't be read
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            RecordError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Why a text record was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// Wrong number of comma separated fields
    MissingFields { found: usize },
    InvalidId(String),
    InvalidScore(String),
    /// Bytes the reader could not decode as a record (bad UTF-8 and the like)
    Unreadable(String),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::MissingFields { found } => {
                write!(f, "Missing required fields (expected 3, found {}).", found)
            }
            MalformedReason::InvalidId(raw) => write!(f, "Invalid ID format `{}`.", raw),
            MalformedReason::InvalidScore(raw) => write!(f, "Score format is invalid `{}`.", raw),
            MalformedReason::Unreadable(detail) => write!(f, "Unreadable record: {}.", detail),
        }
    }
}
