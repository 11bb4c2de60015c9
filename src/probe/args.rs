//! Access to the process launch arguments
//!
//! Only the *addresses* of the argument count and vector matter; the strings
//! themselves are never read.

use std::ffi::{c_char, c_int, CString, NulError};
use std::marker::PhantomData;
use std::ptr;

/// Borrowed view of an `(argc, argv)` pair
#[derive(Debug, Clone, Copy)]
pub struct LaunchArgs<'a> {
    argc: c_int,
    argv: *const *const c_char,
    _vector: PhantomData<&'a [*const c_char]>,
}

impl<'a> LaunchArgs<'a> {
    /// Wrap the pair handed to a C `main`.
    ///
    /// # Safety
    ///
    /// `argv` must be null, or point to at least one readable pointer that
    /// stays valid for `'a`. The C launch convention (`argv[argc] == NULL`)
    /// satisfies this for any `argc >= 0`.
    pub unsafe fn from_raw(argc: c_int, argv: *const *const c_char) -> Self {
        LaunchArgs {
            argc,
            argv,
            _vector: PhantomData,
        }
    }

    pub fn count(&self) -> c_int {
        self.argc
    }

    /// Where the argument vector points
    pub fn vector(&self) -> *const *const c_char {
        self.argv
    }

    /// First element of the vector, null when the vector itself is null
    pub fn first(&self) -> *const c_char {
        if self.argv.is_null() {
            return ptr::null();
        }
        // SAFETY: `from_raw` guarantees at least one readable element.
        unsafe { *self.argv }
    }
}

/// A C-style argument vector built from Rust strings
///
/// Keeps the strings and the null-terminated pointer array alive for as long
/// as the borrowed [`LaunchArgs`] is used.
#[derive(Debug)]
pub struct OwnedLaunchArgs {
    _strings: Vec<CString>,
    pointers: Vec<*const c_char>,
}

impl OwnedLaunchArgs {
    pub fn new<I, S>(args: I) -> Result<Self, NulError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        let strings = args
            .into_iter()
            .map(CString::new)
            .collect::<Result<Vec<_>, _>>()?;
        let mut pointers: Vec<*const c_char> = strings.iter().map(|s| s.as_ptr()).collect();
        pointers.push(ptr::null());

        Ok(OwnedLaunchArgs {
            _strings: strings,
            pointers,
        })
    }

    pub fn launch_args(&self) -> LaunchArgs<'_> {
        let argc = (self.pointers.len() - 1) as c_int;
        // SAFETY: `pointers` is null-terminated and owned by `self`.
        unsafe { LaunchArgs::from_raw(argc, self.pointers.as_ptr()) }
    }
}
