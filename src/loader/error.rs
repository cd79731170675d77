//! Error types for loading zone records

use std::net::AddrParseError;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading zone records.
///
/// `line` is the zero-based ordinal of the record in the input, so the
/// offending line can be located in the source dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Reading a record from the input failed
    #[error("failed to read line #{line}: {source}")]
    Io {
        /// Record ordinal
        line: usize,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The record does not have exactly five tab-separated fields
    #[error("invalid data #{line}: want 5 parts got {got}")]
    FieldCount {
        /// Record ordinal
        line: usize,
        /// Number of fields found
        got: usize,
    },

    /// The start address is not an IP address
    #[error("invalid start address #{line}: {value:?}: {source}")]
    InvalidStartAddress {
        /// Record ordinal
        line: usize,
        /// Raw field text
        value: String,
        /// Parse failure
        source: AddrParseError,
    },

    /// The end address is not an IP address
    #[error("invalid end address #{line}: {value:?}: {source}")]
    InvalidEndAddress {
        /// Record ordinal
        line: usize,
        /// Raw field text
        value: String,
        /// Parse failure
        source: AddrParseError,
    },

    /// Start and end addresses belong to different address families
    #[error("mixed address families #{line}: {start} -> {end}")]
    FamilyMismatch {
        /// Record ordinal
        line: usize,
        /// Raw start address
        start: String,
        /// Raw end address
        end: String,
    },

    /// The AS number is not an unsigned 32-bit integer
    #[error("invalid as number #{line}: {value:?}: {source}")]
    InvalidAsNumber {
        /// Record ordinal
        line: usize,
        /// Raw field text
        value: String,
        /// Parse failure
        source: ParseIntError,
    },
}

impl LoadError {
    /// Record ordinal the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Open { .. } => None,
            LoadError::Io { line, .. }
            | LoadError::FieldCount { line, .. }
            | LoadError::InvalidStartAddress { line, .. }
            | LoadError::InvalidEndAddress { line, .. }
            | LoadError::FamilyMismatch { line, .. }
            | LoadError::InvalidAsNumber { line, .. } => Some(*line),
        }
    }
}
