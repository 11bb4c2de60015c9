//! Probe error types
//!
//! The only fallible step of a probe run is requesting the scratch block.
//! Both variants are fatal for the binary: it prints the message and exits
//! with a non-zero status instead of producing a partial report.

use std::fmt;

/// Errors that can occur while probing the address space
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The allocator refused the scratch block request
    AllocationFailure { requested: usize },

    /// A zero-sized block has no address of its own
    InvalidAllocationSize { size: usize },
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::AllocationFailure { requested } => {
                write!(
                    f,
                    "Allocation failure: could not obtain a {} byte scratch block",
                    requested
                )
            }
            ProbeError::InvalidAllocationSize { size } => {
                write!(
                    f,
                    "Invalid allocation size: {} (must be positive)",
                    size
                )
            }
        }
    }
}

impl std::error::Error for ProbeError {}
