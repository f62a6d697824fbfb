//! Error types for memtest
//!
//! Two outcomes end a run early: the buffer could not be allocated, or a
//! test phase read back something it did not write. Both are returned as
//! values; only the binary decides to terminate the process.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for memtest operations
pub type Result<T> = std::result::Result<T, Error>;

/// A detected memory defect.
///
/// Values are widened to `u64` so one type covers every word width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryFault {
    /// A word did not hold its own address after the addressing fill.
    #[error("MEMORY ADDRESSING ERROR: {address:#x} contains {value}")]
    Addressing {
        /// Address of the offending word
        address: usize,
        /// Value read back from it
        value: u64,
    },

    /// A first-half word and its mirror disagree with the pattern written.
    #[error("MEMORY ERROR DETECTED: {address1:#x} != {address2:#x} ({value1} vs {value2})")]
    Mismatch {
        /// Word index within each half
        index: usize,
        /// Address of the first-half word
        address1: usize,
        /// Address of the second-half word
        address2: usize,
        /// Value read from the first half
        value1: u64,
        /// Value read from the second half
        value2: u64,
    },
}

/// Error types for memtest
#[derive(Debug, Error)]
pub enum Error {
    /// The test buffer could not be obtained at the requested size
    #[error("Unable to allocate {megabytes} megabytes: {reason}")]
    AllocationFailure {
        /// Requested size
        megabytes: usize,
        /// System or allocator reason
        reason: String,
    },

    /// A test phase detected a memory defect
    #[error(transparent)]
    MemoryFault(#[from] MemoryFault),

    /// Invalid configuration or invocation parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error (config file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Allocation failures and memory faults exit with `1`; configuration
    /// and I/O problems with `2`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::AllocationFailure { .. } | Error::MemoryFault(_) => 1,
            Error::InvalidConfig(_) | Error::Io(_) => 2,
        }
    }

    /// The fault carried by this error, if any.
    pub fn as_fault(&self) -> Option<&MemoryFault> {
        match self {
            Error::MemoryFault(fault) => Some(fault),
            _ => None,
        }
    }
}
