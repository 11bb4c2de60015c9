//! Address-space probe
//!
//! This module records where variables of each storage duration live in the
//! running process:
//! - [`globals`]: the zero-initialized and initialized statics (`g1`, `gi1`)
//! - [`args`]: the launch argument pair (`argc`, `argv`)
//! - [`scratch`]: the fallible heap block owned by the `alloc` handle
//! - [`errors`]: [`ProbeError`]
//!
//! # Frame Lifetime
//!
//! Stack addresses are only meaningful while their frame exists, so
//! [`observe`] hands the [`Report`] to a closure before returning. The scratch
//! block is still owned by the probe frame at that point and is released once
//! the closure returns.

pub mod args;
pub mod errors;
pub mod globals;
pub mod scratch;

pub use args::{LaunchArgs, OwnedLaunchArgs};
pub use errors::ProbeError;
pub use scratch::{ScratchBlock, DEFAULT_SCRATCH_SIZE};

use crate::report::{BlockInfo, Report};
use std::ffi::{c_char, c_int};
use std::hint::black_box;
use std::mem::MaybeUninit;

/// Record every probed address and pass the report to `consume`
///
/// The argument count and vector are copied into locals of this frame, the
/// same way a C `main` receives them as parameters.
#[inline(never)]
pub fn observe<R, F>(args: LaunchArgs<'_>, alloc_size: usize, consume: F) -> Result<R, ProbeError>
where
    F: FnOnce(&Report, &ScratchBlock) -> R,
{
    let l1 = MaybeUninit::<i32>::uninit();
    let argc: c_int = args.count();
    let argv: *const *const c_char = args.vector();

    let alloc = ScratchBlock::allocate(alloc_size)?;

    let report = Report::new(
        [
            black_box(&l1).as_ptr() as usize,
            black_box(&argc) as *const c_int as usize,
            black_box(&argv) as *const *const *const c_char as usize,
            argv as usize,
            args.first() as usize,
            globals::g1_address(),
            globals::gi1_address(),
            black_box(&alloc) as *const ScratchBlock as usize,
        ],
        BlockInfo {
            address: alloc.address(),
            size: alloc.len(),
        },
    );

    Ok(consume(&report, &alloc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Label;

    #[test]
    fn test_observe_reports_launch_vector() {
        let owned = OwnedLaunchArgs::new(["segscope"]).expect("no nul bytes");
        let args = owned.launch_args();

        let report = observe(args, DEFAULT_SCRATCH_SIZE, |report, _| report.clone())
            .expect("probe succeeds");

        assert_eq!(report.address_of(Label::Argv), Some(args.vector() as usize));
        assert_eq!(report.address_of(Label::ArgvFirst), Some(args.first() as usize));
        assert_eq!(report.address_of(Label::G1), Some(globals::g1_address()));
        assert_eq!(report.block().size, DEFAULT_SCRATCH_SIZE);
    }

    #[test]
    fn test_consumer_sees_live_block() {
        let owned = OwnedLaunchArgs::new(["segscope"]).expect("no nul bytes");

        let (address, bytes) = observe(owned.launch_args(), 32, |report, block| {
            (report.block().address, block.as_bytes().to_vec())
        })
        .expect("probe succeeds");

        assert_ne!(address, 0);
        assert_eq!(bytes, vec![0u8; 32]);
    }

    #[test]
    fn test_allocation_failure_propagates() {
        let owned = OwnedLaunchArgs::new(["segscope"]).expect("no nul bytes");
        let mut consumed = false;

        let result = observe(owned.launch_args(), usize::MAX, |_, _| consumed = true);

        assert_eq!(
            result,
            Err(ProbeError::AllocationFailure {
                requested: usize::MAX
            })
        );
        assert!(!consumed);
    }
}
