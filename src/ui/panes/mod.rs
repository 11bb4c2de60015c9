//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`map`]: every probed address sorted by value, with neighbour distances
//! - [`classes`]: address span covered by each storage class
//! - [`scratch`]: scratch block address, size and hex dump
//! - [`status`]: status bar with keybindings
//! - `utils`: pane border and scrolling helpers
//!
//! Each pane module exports a `render_*` function taking the frame, its area,
//! the data to show, whether it is focused, and its scroll offset.

mod utils;

pub mod classes;
pub mod map;
pub mod scratch;
pub mod status;

pub use classes::render_classes_pane;
pub use map::{map_rows, render_map_pane, MapRow};
pub use scratch::{hex_rows, render_scratch_pane};
pub use status::render_status_bar;
