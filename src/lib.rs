//! # Introduction
//!
//! segscope records where variables of each storage duration live in the
//! running process and prints one labeled line per address, so the stack,
//! heap, `.data` and `.bss` placements can be compared side by side.
//!
//! ## Pipeline
//!
//! ```text
//! argc/argv → Config → probe::observe → Report → line output | TUI
//! ```
//!
//! 1. [`config`]: settings read from `SEGSCOPE_*` environment variables.
//! 2. [`probe`]: declares the probed variables and captures their addresses
//!    while the probing frame is alive.
//! 3. [`report`]: labels, storage classes, the `<label> [<address>]` line
//!    format, and per-class spans.
//! 4. [`ui`]: ratatui memory map viewer; not part of the stable library API.
//!
//! ## Probed variables
//!
//! `l1` (uninitialized local), `argc`, `&argv`, `argv`, `*argv`, `g1`
//! (zeroed static), `gi1` (initialized static) and `alloc` (the handle owning a
//! heap block). Addresses change between runs under ASLR; only their relative
//! placement is of interest.

pub mod config;
pub mod probe;
pub mod report;
pub mod ui;
