//! Terminal memory map built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: viewer state, keyboard event loop, pane focus, sort order
//! - **[`panes`]**: stateless render functions for each visible pane (address
//!   map, storage classes, scratch block, status bar)
//! - **[`theme`]**: color palette shared by all panes
//!
//! Construct an [`App`] from a probe [`Report`] and the live [`ScratchBlock`],
//! then call [`App::run`].
//!
//! [`Report`]: crate::report::Report
//! [`ScratchBlock`]: crate::probe::ScratchBlock
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
