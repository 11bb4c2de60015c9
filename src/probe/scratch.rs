//! Fallible scratch allocation
//!
//! The `alloc` handle of the probe owns one [`ScratchBlock`]. The request goes
//! through [`Vec::try_reserve_exact`] so an allocator refusal surfaces as
//! [`ProbeError::AllocationFailure`] instead of aborting the process.

use super::errors::ProbeError;

/// Default scratch block size in bytes
pub const DEFAULT_SCRATCH_SIZE: usize = 16;

/// A uniquely owned, zero-filled heap block
#[derive(Debug)]
pub struct ScratchBlock {
    bytes: Box<[u8]>,
}

impl ScratchBlock {
    /// Request a block of exactly `size` bytes
    pub fn allocate(size: usize) -> Result<Self, ProbeError> {
        if size == 0 {
            return Err(ProbeError::InvalidAllocationSize { size });
        }

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(size)
            .map_err(|_| ProbeError::AllocationFailure { requested: size })?;
        bytes.resize(size, 0u8);

        Ok(ScratchBlock {
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// Address of the first byte of the block
    pub fn address(&self) -> usize {
        self.bytes.as_ptr() as usize
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
