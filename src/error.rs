//! Error types for the jww2dxf library

use std::io;
use thiserror::Error;

/// Main error type for jww2dxf operations
#[derive(Debug, Error)]
pub enum JwwError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// First 8 bytes of the file did not match the `JwwData.` signature
    #[error("invalid signature: expected \"JwwData.\"")]
    InvalidSignature,

    /// The byte stream ended before a field could be fully read
    #[error("short read at offset {offset:#X} while reading {field}")]
    ShortRead {
        /// Name of the field being decoded when the stream ran out
        field: &'static str,
        /// Byte offset at which the read was attempted
        offset: usize,
    },

    /// A per-class decoder encountered a class name with no known layout
    #[error("unknown entity class {name:?} at offset {offset:#X}")]
    UnknownClass {
        /// The unrecognized class name
        name: String,
        /// Byte offset of the record that named this class
        offset: usize,
    },

    /// A class reference named a PID the registry has never bound
    #[error("dangling class reference: pid {pid} not in registry (known pids: {known:?})")]
    DanglingClassRef {
        /// The PID that could not be resolved
        pid: u16,
        /// PIDs bound in the registry at the time of the failed lookup
        known: Vec<u16>,
    },

    /// The entity-list scan never found a structurally valid start pattern
    #[error("entity list start pattern not found after offset {scanned_from:#X}")]
    EntityListNotFound {
        /// Offset at which the scan began
        scanned_from: usize,
    },

    /// Generic error with a custom message, for ad-hoc propagation
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for jww2dxf operations
pub type Result<T> = std::result::Result<T, JwwError>;

impl From<String> for JwwError {
    fn from(s: String) -> Self {
        JwwError::Custom(s)
    }
}

impl From<&str> for JwwError {
    fn from(s: &str) -> Self {
        JwwError::Custom(s.to_string())
    }
}
