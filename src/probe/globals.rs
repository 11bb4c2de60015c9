//! Process-wide probe variables
//!
//! Atomics keep both statics writable without `static mut`, so the linker
//! places them in `.bss` (zero) and `.data` (non-zero) rather than `.rodata`.

use std::sync::atomic::{AtomicI32, Ordering};

/// Value `gi1` holds from load time
pub const GI1_INITIAL: i32 = 123;

/// Zero-initialized global
pub static G1: AtomicI32 = AtomicI32::new(0);

/// Global initialized at load time
pub static GI1: AtomicI32 = AtomicI32::new(GI1_INITIAL);

pub fn g1_address() -> usize {
    &G1 as *const AtomicI32 as usize
}

pub fn gi1_address() -> usize {
    &GI1 as *const AtomicI32 as usize
}

/// Current values of `(g1, gi1)`
pub fn values() -> (i32, i32) {
    (G1.load(Ordering::Relaxed), GI1.load(Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_values() {
        assert_eq!(values(), (0, GI1_INITIAL));
    }

    #[test]
    fn test_globals_are_distinct() {
        assert_ne!(g1_address(), gi1_address());
        assert_ne!(g1_address(), 0);
    }
}
